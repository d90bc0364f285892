//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate tables
//! from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxCategory;

use super::types::{RateTable, RateTableMetadata, RatesConfig};

/// Loads and provides access to a rate table.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the validated, immutable rate table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/iva_es/
/// ├── table.yaml   # Rate table metadata
/// └── rates.yaml   # Category-to-rate mapping
/// ```
///
/// # Example
///
/// ```no_run
/// use receipt_engine::config::ConfigLoader;
/// use receipt_engine::models::TaxCategory;
///
/// let loader = ConfigLoader::load("./config/iva_es").unwrap();
///
/// let rate = loader.get_rate(TaxCategory::General).unwrap();
/// println!("General rate: {}%", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
}

impl ConfigLoader {
    /// Loads a rate table from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/iva_es")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rate mapping is not total over the tax categories
    /// - Any rate is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use receipt_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/iva_es")?;
    /// # Ok::<(), receipt_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load table.yaml
        let metadata_path = path.join("table.yaml");
        let metadata = Self::load_yaml::<RateTableMetadata>(&metadata_path)?;

        // Load rates.yaml
        let rates_path = path.join("rates.yaml");
        let rates_config = Self::load_yaml::<RatesConfig>(&rates_path)?;

        let table = RateTable::new(metadata, rates_config.rates)?;

        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        self.table.metadata()
    }

    /// Gets the percentage rate for a tax category.
    ///
    /// # Arguments
    ///
    /// * `category` - The tax category to look up
    ///
    /// # Example
    ///
    /// ```no_run
    /// use receipt_engine::config::ConfigLoader;
    /// use receipt_engine::models::TaxCategory;
    ///
    /// let loader = ConfigLoader::load("./config/iva_es")?;
    /// let rate = loader.get_rate(TaxCategory::Reducido)?;
    /// println!("Reduced rate: {}%", rate);
    /// # Ok::<(), receipt_engine::error::EngineError>(())
    /// ```
    pub fn get_rate(&self, category: TaxCategory) -> EngineResult<Decimal> {
        self.table.rate(category)
    }
}
