//! Configuration loading and management for the Receipt Calculation Engine.
//!
//! This module provides functionality to load rate tables from YAML files,
//! including table metadata and the category-to-rate mapping.
//!
//! # Example
//!
//! ```no_run
//! use receipt_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/iva_es").unwrap();
//! println!("Loaded rate table: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateTable, RateTableMetadata};
