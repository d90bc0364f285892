//! Finalized receipt models.
//!
//! This module contains the [`Receipt`] type and its associated structures
//! that capture all outputs of a receipt calculation: computed lines,
//! receipt-wide totals, and the per-category tax breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxCategory;

/// A single computed line of a finalized receipt.
///
/// Captures the pre-tax and tax-inclusive amounts for one purchase line.
/// The line's tax amount is not stored separately; it is recoverable as
/// [`ReceiptLine::tax_amount`].
///
/// # Example
///
/// ```
/// use receipt_engine::models::{ReceiptLine, TaxCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = ReceiptLine {
///     name: "Perfume".to_string(),
///     quantity: Decimal::from_str("2").unwrap(),
///     pre_tax: Decimal::from_str("40.00").unwrap(),
///     tax_category: TaxCategory::General,
///     tax_inclusive: Decimal::from_str("48.40").unwrap(),
/// };
/// assert_eq!(line.tax_amount(), Decimal::from_str("8.40").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// The product name.
    pub name: String,
    /// The quantity purchased.
    pub quantity: Decimal,
    /// The amount before tax (unit price x quantity, rounded to 2 dp).
    pub pre_tax: Decimal,
    /// The tax category applied to this line.
    pub tax_category: TaxCategory,
    /// The amount including tax, rounded to 2 dp.
    pub tax_inclusive: Decimal,
}

impl ReceiptLine {
    /// Returns the tax charged on this line (tax-inclusive minus pre-tax).
    pub fn tax_amount(&self) -> Decimal {
        self.tax_inclusive - self.pre_tax
    }
}

/// Total tax collected for one tax category across a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSubtotal {
    /// The tax category.
    pub tax_category: TaxCategory,
    /// The tax accumulated for this category, rounded to 2 dp.
    pub tax: Decimal,
}

/// Aggregated totals for a receipt.
///
/// # Example
///
/// ```
/// use receipt_engine::models::ReceiptTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = ReceiptTotals {
///     pre_tax: Decimal::from_str("150.00").unwrap(),
///     tax_inclusive: Decimal::from_str("176.00").unwrap(),
///     tax: Decimal::from_str("26.00").unwrap(),
/// };
/// assert_eq!(totals.pre_tax + totals.tax, totals.tax_inclusive);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTotals {
    /// The total amount before tax.
    pub pre_tax: Decimal,
    /// The total amount including tax.
    pub tax_inclusive: Decimal,
    /// The total tax collected.
    pub tax: Decimal,
}

/// The complete result of a receipt calculation.
///
/// Lines preserve the order of the input purchase lines. The tax breakdown
/// contains one entry per category that appeared in at least one line,
/// sorted by category so that identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The computed lines, in input order.
    pub lines: Vec<ReceiptLine>,
    /// Receipt-wide totals.
    pub totals: ReceiptTotals,
    /// Tax collected per category present on the receipt.
    pub tax_breakdown: Vec<TaxSubtotal>,
}
