//! Configuration types for rate tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxCategory;

/// Metadata about a rate table.
///
/// Identifies the jurisdiction and version of the table so that callers
/// can pin a specific table for reproducible receipt output.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableMetadata {
    /// A short code identifying the jurisdiction (e.g., "iva_es").
    pub code: String,
    /// The human-readable name of the rate table.
    pub name: String,
    /// The version of the table.
    pub version: String,
    /// The date these rates took effect.
    pub effective_date: NaiveDate,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Map of tax category to percentage rate.
    pub rates: HashMap<TaxCategory, Decimal>,
}

/// An immutable, validated rate table.
///
/// The mapping is total over [`TaxCategory`]: construction fails if any
/// category has no rate or a negative rate, so lookups on a constructed
/// table can only fail for a table built without a category present,
/// which [`RateTable::new`] rules out.
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Table metadata.
    metadata: RateTableMetadata,
    /// Percentage rate per category.
    rates: HashMap<TaxCategory, Decimal>,
}

impl RateTable {
    /// Creates a validated RateTable from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` if any tax category lacks a rate, or
    /// `ConfigParseError` if any rate is negative.
    pub fn new(
        metadata: RateTableMetadata,
        rates: HashMap<TaxCategory, Decimal>,
    ) -> EngineResult<Self> {
        for category in TaxCategory::ALL {
            match rates.get(&category) {
                None => return Err(EngineError::RateNotFound { category }),
                Some(rate) if rate.is_sign_negative() => {
                    return Err(EngineError::ConfigParseError {
                        path: "rates.yaml".to_string(),
                        message: format!(
                            "rate for category '{}' must be non-negative, got {}",
                            category, rate
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self { metadata, rates })
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Returns the percentage rate for a tax category.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` if the category has no entry. A table built
    /// through [`RateTable::new`] always has every category.
    pub fn rate(&self, category: TaxCategory) -> EngineResult<Decimal> {
        self.rates
            .get(&category)
            .copied()
            .ok_or(EngineError::RateNotFound { category })
    }
}
