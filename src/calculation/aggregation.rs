//! Aggregation stage.
//!
//! Folds computed receipt lines into receipt-wide totals and a
//! per-category tax breakdown in a single pass. Sums accumulate at full
//! precision and are rounded once at the final reported value, unlike the
//! per-step rounding of line computation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{ReceiptLine, ReceiptTotals, TaxCategory, TaxSubtotal};

use super::rounding::round_money;

/// The result of aggregating computed receipt lines.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// Receipt-wide totals.
    pub totals: ReceiptTotals,
    /// Tax collected per category present, sorted by category.
    pub tax_breakdown: Vec<TaxSubtotal>,
}

/// Aggregates computed lines into totals and a tax breakdown.
///
/// Runs a single pass over the lines, accumulating pre-tax, tax-inclusive
/// and tax sums, plus a category-to-tax mapping initialized lazily on the
/// first line of each category. Per-line tax amounts are the already
/// rounded values, so breakdown entries are sums of rounded quantities.
///
/// The breakdown carries one entry per category that appears on at least
/// one line; categories with no lines are omitted. Entries are emitted
/// sorted by category so identical inputs produce identical output.
///
/// # Examples
///
/// ```
/// use receipt_engine::calculation::aggregate_lines;
///
/// let result = aggregate_lines(&[]);
/// assert!(result.tax_breakdown.is_empty());
/// assert_eq!(result.totals.tax, rust_decimal::Decimal::ZERO);
/// ```
pub fn aggregate_lines(lines: &[ReceiptLine]) -> AggregationResult {
    let mut pre_tax_sum = Decimal::ZERO;
    let mut tax_inclusive_sum = Decimal::ZERO;
    let mut tax_sum = Decimal::ZERO;
    let mut by_category: HashMap<TaxCategory, Decimal> = HashMap::new();

    for line in lines {
        let tax = line.tax_amount();

        pre_tax_sum += line.pre_tax;
        tax_inclusive_sum += line.tax_inclusive;
        tax_sum += tax;

        *by_category.entry(line.tax_category).or_insert(Decimal::ZERO) += tax;
    }

    let mut tax_breakdown: Vec<TaxSubtotal> = by_category
        .into_iter()
        .map(|(tax_category, tax)| TaxSubtotal {
            tax_category,
            tax: round_money(tax),
        })
        .collect();
    tax_breakdown.sort_by_key(|subtotal| subtotal.tax_category);

    AggregationResult {
        totals: ReceiptTotals {
            pre_tax: round_money(pre_tax_sum),
            tax_inclusive: round_money(tax_inclusive_sum),
            tax: round_money(tax_sum),
        },
        tax_breakdown,
    }
}
