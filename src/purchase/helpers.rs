//! Order Helpers
//!
//! Order id construction and log formatting.

use super::models::ValidatedItem;
use chrono::NaiveDateTime;

/// Prefix of every order id
pub const ORDER_ID_PREFIX: &str = "ASR";

/// Builds an order id from the acceptance time, e.g. `ASR20240315193005`.
///
/// Ids have one-second resolution. Two orders accepted within the same
/// second share an id; ids are for human traceability, not deduplication.
pub fn generate_order_id(accepted_at: NaiveDateTime) -> String {
    format!("{}{}", ORDER_ID_PREFIX, accepted_at.format("%Y%m%d%H%M%S"))
}

/// Produces a human-readable one-line summary for a list of order lines.
///
/// Example output: `"2x Medianoche @ 11.99, 1x Café Cubano @ 3.99"`.
pub fn format_item_summary(items: &[ValidatedItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {} @ {}", i.quantity, i.product_name, i.unit_price))
        .collect::<Vec<_>>()
        .join(", ")
}
