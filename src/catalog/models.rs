//! Catalog Domain Models
//!
//! Products and categories are built once at startup and never change.

use crate::money::Money;
use serde::Serialize;

/// A product on the menu
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Stable identifier, unique across the catalog
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Authoritative price, always positive
    pub price: Money,

    /// Id of the [`Category`] this product belongs to
    pub category: String,

    /// Path of the product image under `/assets`
    pub image: String,

    /// Highlighted on the landing page
    pub popular: bool,
}

/// A menu section
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Query string for `GET /api/products`
#[derive(Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
}

impl ProductQuery {
    /// Builds the query from decoded key/value pairs. The last `category`
    /// wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let category = pairs
            .into_iter()
            .filter(|(key, _)| key == "category")
            .map(|(_, value)| value)
            .last();
        Self { category }
    }

    /// The category filter, treating `?category=` the same as no filter.
    pub fn filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
