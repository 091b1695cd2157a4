//! The restaurant's compiled-in menu

use super::models::{Category, Product};
use crate::money::Money;

/// (id, name, description, price in cents, category, image, popular)
type ProductRow = (i64, &'static str, &'static str, i64, &'static str, &'static str, bool);

#[rustfmt::skip]
const PRODUCTS: &[ProductRow] = &[
    // Sándwiches
    (1, "Sándwich Cubano Clásico", "Pan cubano, jamón, cerdo asado, queso suizo, pepinillos y mostaza", 1299, "sandwiches", "/assets/sandwich-cubano.jpg", true),
    (2, "Medianoche", "Pan dulce, jamón, cerdo asado, queso suizo, pepinillos y mostaza", 1199, "sandwiches", "/assets/medianoche.jpg", false),
    (3, "Pan con Lechón", "Pan cubano crujiente con lechón asado, cebolla y mojo", 1399, "sandwiches", "/assets/pan-lechon.jpg", true),
    // Platos Principales
    (4, "Ropa Vieja", "Carne de res deshebrada en salsa criolla con arroz y frijoles", 1699, "platos", "/assets/ropa-vieja.jpg", true),
    (5, "Pollo a la Plancha", "Pechuga de pollo marinada a la plancha con mojo y vegetales", 1499, "platos", "/assets/pollo-plancha.jpg", false),
    (6, "Pescado a la Veracruzana", "Filete de pescado fresco en salsa de tomate con aceitunas y alcaparras", 1899, "platos", "/assets/pescado-veracruz.jpg", false),
    (7, "Arroz con Pollo", "Arroz amarillo con pollo, vegetales y especias cubanas", 1599, "platos", "/assets/arroz-pollo.jpg", true),
    // Bebidas
    (8, "Café Cubano", "Espresso endulzado al estilo cubano tradicional", 399, "bebidas", "/assets/cafe-cubano.jpg", true),
    (9, "Mojito Sin Alcohol", "Refrescante bebida con menta, limón y agua con gas", 699, "bebidas", "/assets/mojito.jpg", false),
    (10, "Guarapo de Caña", "Jugo fresco de caña de azúcar natural", 499, "bebidas", "/assets/guarapo.jpg", false),
    // Postres
    (11, "Flan Cubano", "Postre tradicional de leche condensada con caramelo", 699, "postres", "/assets/flan.jpg", true),
    (12, "Churros Cubanos", "Churros crujientes con azúcar y canela, servidos calientes", 599, "postres", "/assets/churros.jpg", false),
    (13, "Helado de Coco", "Cremoso helado artesanal de coco fresco", 499, "postres", "/assets/helado-coco.jpg", false),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("sandwiches", "Sándwiches"),
    ("platos", "Platos Principales"),
    ("bebidas", "Bebidas"),
    ("postres", "Postres"),
];

pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(id, name, description, cents, category, image, popular)| Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price: Money::from_cents(cents),
                category: category.to_string(),
                image: image.to_string(),
                popular,
            },
        )
        .collect()
}

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, name)| Category {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}
