//! Purchase Domain Models
//!
//! Inputs here are untrusted: `CartItem::price` and `PurchaseRequest::total`
//! are whatever the browser claims. Outputs carry only authoritative
//! [`Money`] values taken from the catalog.

use crate::money::Money;
use crate::validation::{validate_email, validate_length, validate_positive_amount, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const CUSTOMER_NAME_MIN: usize = 2;
pub const CUSTOMER_NAME_MAX: usize = 100;

// =============================================================================
// Input
// =============================================================================

/// One line of a submitted cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: i64,

    pub quantity: i64,

    /// Client-claimed unit price. Never used for pricing.
    pub price: f64,
}

/// Body of `POST /api/purchase`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRequest {
    pub items: Vec<CartItem>,

    /// Client-claimed order total
    pub total: f64,

    pub customer_name: String,

    pub customer_email: String,

    #[serde(default)]
    pub customer_phone: Option<String>,
}

impl PurchaseRequest {
    /// Checks field shapes, collecting every violation.
    ///
    /// Item quantities are left to the purchase validator so a bad quantity
    /// is always reported as a rejected item.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_positive_amount("total", self.total));
        errors.check(validate_length(
            "customer_name",
            &self.customer_name,
            CUSTOMER_NAME_MIN,
            CUSTOMER_NAME_MAX,
        ));
        errors.check(validate_email("customer_email", &self.customer_email));

        errors.into_result()
    }
}

// =============================================================================
// Output
// =============================================================================

/// A cart line re-priced from the catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidatedItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

/// An accepted order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// `ASR` followed by the local acceptance time as `YYYYMMDDHHMMSS`
    pub order_id: String,

    /// Sum of every `ValidatedItem::total_price`
    pub total: Money,

    pub items: Vec<ValidatedItem>,
}

/// Success body of `POST /api/purchase`
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub order_id: String,
    pub total: Money,
    pub items: Vec<ValidatedItem>,
}

impl From<Order> for PurchaseResponse {
    fn from(order: Order) -> Self {
        Self {
            status: "success",
            message: "Pedido procesado correctamente",
            order_id: order.order_id,
            total: order.total,
            items: order.items,
        }
    }
}
