//! Catalog Store
//!
//! Read-only lookups over the fixed product and category lists. A single
//! `Catalog` is built at startup and shared by reference; nothing mutates it
//! afterwards, so concurrent requests need no synchronization.

use super::data;
use super::models::{Category, Product};
use thiserror::Error;

/// Catalog lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(i64),
}

/// Immutable product and category data
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from explicit data. Products keep their given order.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The restaurant's compiled-in menu.
    pub fn restaurant() -> Self {
        Self::new(data::products(), data::categories())
    }

    /// Returns every product, or only those in `category` when given.
    ///
    /// An unknown category yields an empty list.
    pub fn list_products(&self, category: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    pub fn get_product(&self, id: i64) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Categories in declaration order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }
}
