//! Receipt Calculation Engine for Spanish IVA
//!
//! This crate computes finalized sales receipts from purchase lines: per-line
//! pre-tax amounts, IVA tax, and tax-inclusive amounts, plus receipt-wide
//! totals and a per-category tax breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
