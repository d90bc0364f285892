//! Core data models for the Receipt Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod line;
mod product;
mod receipt;

pub use line::PurchaseLine;
pub use product::{Product, TaxCategory};
pub use receipt::{Receipt, ReceiptLine, ReceiptTotals, TaxSubtotal};
