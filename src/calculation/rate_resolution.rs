//! Rate resolution stage.
//!
//! Maps a tax category to its percentage rate through the configured
//! rate table. An unknown or unconfigured category is an error, never a
//! silent zero.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::TaxCategory;

/// Resolves the percentage rate for a tax category.
///
/// # Arguments
///
/// * `category` - The tax category to resolve
/// * `table` - The rate table to resolve against
///
/// # Returns
///
/// Returns the percentage rate (e.g. 21 for 21%), or `RateNotFound` if
/// the table has no entry for the category.
///
/// # Examples
///
/// ```no_run
/// use receipt_engine::calculation::resolve_rate;
/// use receipt_engine::config::ConfigLoader;
/// use receipt_engine::models::TaxCategory;
///
/// let loader = ConfigLoader::load("./config/iva_es")?;
/// let rate = resolve_rate(TaxCategory::General, loader.table())?;
/// # Ok::<(), receipt_engine::error::EngineError>(())
/// ```
pub fn resolve_rate(category: TaxCategory, table: &RateTable) -> EngineResult<Decimal> {
    table.rate(category)
}
