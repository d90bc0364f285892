//! Product model and tax category enumeration.
//!
//! This module defines the Product struct and the closed TaxCategory enum
//! that determines which IVA rate applies to a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed enumeration of recognized IVA tax categories.
///
/// Every product carries exactly one category, and a rate table must define
/// a rate for every category. The serialized names match the wire format
/// used by upstream collaborators (e.g. `superreducidoA`, `sinIva`).
///
/// # Example
///
/// ```
/// use receipt_engine::models::TaxCategory;
///
/// let category = TaxCategory::General;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"general\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    /// The standard IVA rate.
    #[serde(rename = "general")]
    General,
    /// The reduced rate for essential goods and services.
    #[serde(rename = "reducido")]
    Reducido,
    /// Super-reduced rate, variant A.
    #[serde(rename = "superreducidoA")]
    SuperReducidoA,
    /// Super-reduced rate, variant B.
    #[serde(rename = "superreducidoB")]
    SuperReducidoB,
    /// Super-reduced rate, variant C.
    #[serde(rename = "superreducidoC")]
    SuperReducidoC,
    /// Exempt products carrying no IVA.
    #[serde(rename = "sinIva")]
    SinIva,
}

impl TaxCategory {
    /// All categories, in declaration order.
    ///
    /// Used to validate that a rate table is total over the enumeration.
    pub const ALL: [TaxCategory; 6] = [
        TaxCategory::General,
        TaxCategory::Reducido,
        TaxCategory::SuperReducidoA,
        TaxCategory::SuperReducidoB,
        TaxCategory::SuperReducidoC,
        TaxCategory::SinIva,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::General => "general",
            TaxCategory::Reducido => "reducido",
            TaxCategory::SuperReducidoA => "superreducidoA",
            TaxCategory::SuperReducidoB => "superreducidoB",
            TaxCategory::SuperReducidoC => "superreducidoC",
            TaxCategory::SinIva => "sinIva",
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a product available for purchase.
///
/// Products are immutable and supplied by an upstream collaborator with
/// price and category already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The display name of the product.
    pub name: String,
    /// The unit price before tax.
    pub unit_price: Decimal,
    /// The tax category that determines the applicable rate.
    pub tax_category: TaxCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tax_category_serialization_matches_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaxCategory::General).unwrap(),
            "\"general\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::Reducido).unwrap(),
            "\"reducido\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::SuperReducidoA).unwrap(),
            "\"superreducidoA\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::SuperReducidoB).unwrap(),
            "\"superreducidoB\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::SuperReducidoC).unwrap(),
            "\"superreducidoC\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::SinIva).unwrap(),
            "\"sinIva\""
        );
    }

    #[test]
    fn test_tax_category_round_trip() {
        for category in TaxCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let deserialized: TaxCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(category, deserialized);
        }
    }

    #[test]
    fn test_tax_category_display_matches_serde_name() {
        for category in TaxCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_all_contains_every_variant_once() {
        let mut seen = std::collections::HashSet::new();
        for category in TaxCategory::ALL {
            assert!(seen.insert(category), "duplicate category in ALL");
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_deserialize_product() {
        let json = r#"{
            "name": "Leche",
            "unit_price": "1.15",
            "tax_category": "superreducidoA"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Leche");
        assert_eq!(product.unit_price, dec("1.15"));
        assert_eq!(product.tax_category, TaxCategory::SuperReducidoA);
    }

    #[test]
    fn test_serialize_product_round_trip() {
        let product = Product {
            name: "Perfume".to_string(),
            unit_price: dec("20.00"),
            tax_category: TaxCategory::General,
        };

        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let result = serde_json::from_str::<TaxCategory>("\"luxury\"");
        assert!(result.is_err());
    }
}
