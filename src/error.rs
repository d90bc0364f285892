//! Error types for the Receipt Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during receipt calculation.

use thiserror::Error;

use crate::models::TaxCategory;

/// The main error type for the Receipt Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use receipt_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate is defined for the given tax category.
    #[error("No rate defined for tax category '{category}'")]
    RateNotFound {
        /// The tax category with no resolvable rate.
        category: TaxCategory,
    },

    /// A purchase line contained invalid data.
    #[error("Invalid purchase line for product '{product}': {message}")]
    InvalidLine {
        /// The name of the product on the invalid line.
        product: String,
        /// A description of what made the line invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_rate_not_found_displays_category() {
        let error = EngineError::RateNotFound {
            category: TaxCategory::Reducido,
        };
        assert_eq!(
            error.to_string(),
            "No rate defined for tax category 'reducido'"
        );
    }

    #[test]
    fn test_invalid_line_displays_product_and_message() {
        let error = EngineError::InvalidLine {
            product: "Leche".to_string(),
            message: "quantity must be positive, got 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid purchase line for product 'Leche': quantity must be positive, got 0"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "overflow while summing totals".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: overflow while summing totals"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
