//! Line computation stage.
//!
//! For each purchase line this derives the pre-tax amount, the tax, and
//! the tax-inclusive amount. Each derived value is rounded to 2 decimal
//! places as it is computed; rounding is deliberately not deferred to the
//! totals, so small per-line rounding drift is part of the contract.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{PurchaseLine, ReceiptLine};

use super::rate_resolution::resolve_rate;
use super::rounding::round_money;

/// Computes a receipt line from a purchase line.
///
/// The derivation, in order, each step rounded to 2 decimal places:
/// 1. pre-tax amount = unit price x quantity
/// 2. tax = pre-tax amount x (rate / 100)
/// 3. tax-inclusive amount = pre-tax amount + tax
///
/// # Arguments
///
/// * `line` - The purchase line to compute
/// * `table` - The rate table for tax resolution
///
/// # Returns
///
/// Returns the computed [`ReceiptLine`], or an error if:
/// - The quantity is not positive (`InvalidLine`)
/// - The unit price is negative (`InvalidLine`)
/// - The tax category has no configured rate (`RateNotFound`)
///
/// # Examples
///
/// ```no_run
/// use receipt_engine::calculation::compute_line;
/// use receipt_engine::config::ConfigLoader;
/// use receipt_engine::models::{Product, PurchaseLine, TaxCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/iva_es")?;
/// let line = PurchaseLine {
///     product: Product {
///         name: "Perfume".to_string(),
///         unit_price: Decimal::from_str("10.00").unwrap(),
///         tax_category: TaxCategory::General,
///     },
///     quantity: Decimal::from_str("2").unwrap(),
/// };
///
/// let computed = compute_line(&line, loader.table())?;
/// assert_eq!(computed.pre_tax, Decimal::from_str("20.00").unwrap());
/// assert_eq!(computed.tax_inclusive, Decimal::from_str("24.20").unwrap());
/// # Ok::<(), receipt_engine::error::EngineError>(())
/// ```
pub fn compute_line(line: &PurchaseLine, table: &RateTable) -> EngineResult<ReceiptLine> {
    if line.quantity <= Decimal::ZERO {
        return Err(EngineError::InvalidLine {
            product: line.product.name.clone(),
            message: format!("quantity must be positive, got {}", line.quantity),
        });
    }

    if line.product.unit_price < Decimal::ZERO {
        return Err(EngineError::InvalidLine {
            product: line.product.name.clone(),
            message: format!(
                "unit price must not be negative, got {}",
                line.product.unit_price
            ),
        });
    }

    let rate = resolve_rate(line.product.tax_category, table)?;

    let pre_tax = round_money(line.product.unit_price * line.quantity);
    let tax = round_money(pre_tax * rate / Decimal::ONE_HUNDRED);
    let tax_inclusive = round_money(pre_tax + tax);

    Ok(ReceiptLine {
        name: line.product.name.clone(),
        quantity: line.quantity,
        pre_tax,
        tax_category: line.product.tax_category,
        tax_inclusive,
    })
}
