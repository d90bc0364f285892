//! Purchase line model.
//!
//! This module defines the PurchaseLine struct pairing a product with
//! the quantity purchased.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Represents one line of a purchase: a product and a quantity.
///
/// Quantities are `Decimal` rather than integer so that weighed goods
/// (e.g. 0.75 kg of fruit) can be expressed. Validation of the quantity
/// happens during calculation, not on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// The product being purchased.
    pub product: Product,
    /// The quantity purchased. Must be positive to compute a receipt.
    pub quantity: Decimal,
}
