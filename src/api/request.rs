//! Request types for the Receipt Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/receipt`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, PurchaseLine, TaxCategory};

/// Request body for the `/receipt` endpoint.
///
/// Contains the purchase lines to compute a receipt for. The upstream
/// collaborator resolves product identity and category before calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// The purchase lines, in display order.
    pub lines: Vec<LineRequest>,
}

/// One purchase line in a receipt request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    /// The product being purchased.
    pub product: ProductRequest,
    /// The quantity purchased.
    pub quantity: Decimal,
}

/// Product information in a receipt request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    /// The display name of the product.
    pub name: String,
    /// The unit price before tax.
    pub unit_price: Decimal,
    /// The tax category of the product.
    pub tax_category: TaxCategory,
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Product {
            name: req.name,
            unit_price: req.unit_price,
            tax_category: req.tax_category,
        }
    }
}

impl From<LineRequest> for PurchaseLine {
    fn from(req: LineRequest) -> Self {
        PurchaseLine {
            product: req.product.into(),
            quantity: req.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_receipt_request() {
        let json = r#"{
            "lines": [
                {
                    "product": {
                        "name": "Perfume",
                        "unit_price": "10.00",
                        "tax_category": "general"
                    },
                    "quantity": "2"
                }
            ]
        }"#;

        let request: ReceiptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.lines.len(), 1);
        assert_eq!(request.lines[0].product.name, "Perfume");
        assert_eq!(request.lines[0].product.tax_category, TaxCategory::General);
        assert_eq!(request.lines[0].quantity, dec("2"));
    }

    #[test]
    fn test_deserialize_empty_lines() {
        let json = r#"{ "lines": [] }"#;

        let request: ReceiptRequest = serde_json::from_str(json).unwrap();
        assert!(request.lines.is_empty());
    }

    #[test]
    fn test_line_conversion() {
        let req = LineRequest {
            product: ProductRequest {
                name: "Leche".to_string(),
                unit_price: dec("1.15"),
                tax_category: TaxCategory::SuperReducidoA,
            },
            quantity: dec("6"),
        };

        let line: PurchaseLine = req.into();
        assert_eq!(line.product.name, "Leche");
        assert_eq!(line.product.unit_price, dec("1.15"));
        assert_eq!(line.product.tax_category, TaxCategory::SuperReducidoA);
        assert_eq!(line.quantity, dec("6"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "lines": [
                {
                    "product": {
                        "name": "Perfume",
                        "unit_price": "10.00",
                        "tax_category": "luxury"
                    },
                    "quantity": "1"
                }
            ]
        }"#;

        let result = serde_json::from_str::<ReceiptRequest>(json);
        assert!(result.is_err());
    }
}
