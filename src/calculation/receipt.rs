//! Receipt computation entry point.
//!
//! Runs the three calculation stages in order over one pass of the input:
//! rate resolution, line computation, aggregation.

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{PurchaseLine, Receipt, ReceiptLine};

use super::aggregation::aggregate_lines;
use super::line::compute_line;

/// Computes a finalized receipt from purchase lines.
///
/// This is the single entry point of the engine: a pure, stateless
/// transformation of the input lines and the immutable rate table. Lines
/// are computed in input order and that order is preserved in the output.
/// A single invalid line fails the whole computation; no partial receipt
/// is produced.
///
/// # Arguments
///
/// * `lines` - The validated purchase lines, in display order
/// * `table` - The pinned rate table to resolve tax rates against
///
/// # Returns
///
/// Returns the finalized [`Receipt`], or an error if any line has a
/// non-positive quantity, a negative unit price, or a tax category with
/// no configured rate.
///
/// # Examples
///
/// ```no_run
/// use receipt_engine::calculation::compute_receipt;
/// use receipt_engine::config::ConfigLoader;
/// use receipt_engine::models::{Product, PurchaseLine, TaxCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/iva_es")?;
/// let lines = vec![PurchaseLine {
///     product: Product {
///         name: "Perfume".to_string(),
///         unit_price: Decimal::from_str("10.00").unwrap(),
///         tax_category: TaxCategory::General,
///     },
///     quantity: Decimal::from_str("2").unwrap(),
/// }];
///
/// let receipt = compute_receipt(&lines, loader.table())?;
/// assert_eq!(receipt.totals.tax_inclusive, Decimal::from_str("24.20").unwrap());
/// # Ok::<(), receipt_engine::error::EngineError>(())
/// ```
pub fn compute_receipt(lines: &[PurchaseLine], table: &RateTable) -> EngineResult<Receipt> {
    let computed: Vec<ReceiptLine> = lines
        .iter()
        .map(|line| compute_line(line, table))
        .collect::<EngineResult<_>>()?;

    let aggregated = aggregate_lines(&computed);

    Ok(Receipt {
        lines: computed,
        totals: aggregated.totals,
        tax_breakdown: aggregated.tax_breakdown,
    })
}
