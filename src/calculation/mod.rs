//! Calculation logic for the Receipt Calculation Engine.
//!
//! This module contains the three stages of a receipt computation:
//! rate resolution (mapping a tax category to its percentage rate),
//! line computation (per-line pre-tax, tax, and tax-inclusive amounts),
//! and aggregation (receipt-wide totals plus the per-category tax
//! breakdown), together with the [`compute_receipt`] entry point that
//! runs them in order.

mod aggregation;
mod line;
mod rate_resolution;
mod receipt;
mod rounding;

pub use aggregation::{AggregationResult, aggregate_lines};
pub use line::compute_line;
pub use rate_resolution::resolve_rate;
pub use receipt::compute_receipt;
pub use rounding::round_money;
