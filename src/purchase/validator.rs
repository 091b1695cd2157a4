//! Purchase Validator
//!
//! Turns an untrusted cart into an authoritative order or rejects it.
//!
//! ## Rules
//! - Items are checked in submission order and the first bad item rejects
//!   the whole request.
//! - Prices always come from the catalog; `CartItem::price` is ignored.
//! - The claimed total must match the recomputed total within one cent.
//!
//! The validator holds no state between calls: the same request against
//! the same catalog always gets the same decision.

use super::helpers::{format_item_summary, generate_order_id};
use super::models::{CartItem, Order, PurchaseRequest, ValidatedItem};
use crate::catalog::Catalog;
use crate::money::Money;
use chrono::{Local, NaiveDateTime};
use thiserror::Error;

/// Reasons a cart is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PurchaseError {
    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Invalid quantity for product {0}")]
    InvalidQuantity(i64),

    #[error("Total mismatch. Expected: ${expected}, Received: ${received:.2}")]
    TotalMismatch { expected: Money, received: f64 },
}

/// Re-prices carts against a catalog
#[derive(Debug, Clone, Copy)]
pub struct PurchaseValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> PurchaseValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Validates `request` and stamps the order with the current local time.
    pub fn validate(&self, request: &PurchaseRequest) -> Result<Order, PurchaseError> {
        self.validate_at(request, Local::now().naive_local())
    }

    /// Validates `request` as if accepted at `accepted_at`.
    pub fn validate_at(
        &self,
        request: &PurchaseRequest,
        accepted_at: NaiveDateTime,
    ) -> Result<Order, PurchaseError> {
        let (items, total) = self.price_items(&request.items)?;

        if !total.within_tolerance(request.total) {
            return Err(PurchaseError::TotalMismatch {
                expected: total,
                received: request.total,
            });
        }

        let order = Order {
            order_id: generate_order_id(accepted_at),
            total,
            items,
        };

        tracing::info!(
            order_id = %order.order_id,
            customer = %request.customer_name,
            total = %order.total,
            items = %format_item_summary(&order.items),
            "New purchase"
        );

        Ok(order)
    }

    /// Re-prices each line from the catalog and sums the result.
    pub fn price_items(
        &self,
        items: &[CartItem],
    ) -> Result<(Vec<ValidatedItem>, Money), PurchaseError> {
        let mut validated = Vec::with_capacity(items.len());
        let mut server_total = Money::zero();

        for item in items {
            let line = self.price_item(item)?;
            server_total = server_total
                .checked_add(line.total_price)
                .ok_or(PurchaseError::InvalidQuantity(item.product_id))?;
            validated.push(line);
        }

        Ok((validated, server_total))
    }

    fn price_item(&self, item: &CartItem) -> Result<ValidatedItem, PurchaseError> {
        let product = self
            .catalog
            .get_product(item.product_id)
            .map_err(|_| PurchaseError::ProductNotFound(item.product_id))?;

        // Schema validation already rejects these; re-checked here because
        // this is the last step before money is computed.
        if item.quantity <= 0 {
            return Err(PurchaseError::InvalidQuantity(item.product_id));
        }

        let total_price = product
            .price
            .checked_mul(item.quantity)
            .ok_or(PurchaseError::InvalidQuantity(item.product_id))?;

        Ok(ValidatedItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: item.quantity,
            unit_price: product.price,
            total_price,
        })
    }
}
