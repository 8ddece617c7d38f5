use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{DataValidationError, Result};

/// Product - a single item in the catalog
///
/// A Product starts life in memory with no id; the backing store assigns
/// the id exactly once, on first successful create. Prices are exact
/// decimals, so `12.50` and `"12.5"` are the same value wherever a price
/// is compared or serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier (None until first successful create)
    #[serde(default)]
    pub id: Option<i64>,

    /// Product name (non-empty, non-whitespace)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Decimal monetary value, serialized as canonical decimal text
    #[serde(with = "price_serde")]
    pub price: Decimal,

    /// Whether the product is currently available
    pub available: bool,

    /// Classification tag from the closed category set
    pub category: Category,
}

/// Canonical text form of a price
///
/// Trailing zeros are dropped (`12.50` becomes `"12.5"`), so text equality
/// on the result is exact decimal equality. The store persists and queries
/// prices in this form.
pub fn price_text(price: &Decimal) -> String {
    price.normalize().to_string()
}

/// Serde glue for the price field: canonical text out, text or number in
mod price_serde {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::price_text(price))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Trait-qualified: Decimal also has an inherent deserialize taking
        // raw bytes, which would shadow the serde method here.
        Deserialize::deserialize(deserializer)
    }
}

impl Product {
    /// Create a new Product with no assigned id
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `description` - Free-text description
    /// * `price` - Decimal price
    /// * `available` - Availability flag
    /// * `category` - Classification tag
    ///
    /// # Returns
    /// A new Product with `id` unset; the store assigns the id on create
    pub fn new(
        name: String,
        description: String,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name,
            description,
            price,
            available,
            category,
        }
    }

    /// Check persistence preconditions not enforced by the type system
    ///
    /// # Errors
    /// - `InvalidName` if the name is empty or whitespace-only
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DataValidationError::InvalidName {
                reason: "name cannot be empty or whitespace-only".to_string(),
            });
        }
        Ok(())
    }

    /// Check if this Product has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Convert this Product into its key-value record form
    ///
    /// The record carries `price` as canonical decimal text and `category`
    /// as the enumeration name; `id` is null for an unpersisted Product.
    pub fn to_record(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": price_text(&self.price),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Build a Product from its key-value record form
    ///
    /// `price` may be a decimal string or a JSON number; `available` must
    /// be a real boolean; `category` must be a known enumeration name.
    /// `id` is optional in the record.
    ///
    /// # Errors
    /// - `InvalidRecord` on a missing field, wrong-typed value, or unknown
    ///   category name
    pub fn from_record(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| DataValidationError::InvalidRecord {
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_new_product_has_no_id() {
        let product = Product::new(
            "Fedora".to_string(),
            "A red hat".to_string(),
            dec("12.50"),
            true,
            Category::Cloths,
        );

        assert_eq!(product.id, None);
        assert!(!product.is_persisted());
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert_eq!(product.price, dec("12.50"));
        assert!(product.available);
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn test_display_with_and_without_id() {
        let mut product = Product::new(
            "Fedora".to_string(),
            "A red hat".to_string(),
            dec("12.50"),
            true,
            Category::Cloths,
        );
        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");

        product.id = Some(7);
        assert_eq!(product.to_string(), "<Product Fedora id=[7]>");
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let mut product = Product::new(
            "".to_string(),
            "desc".to_string(),
            dec("1"),
            true,
            Category::Tools,
        );
        assert!(product.validate().is_err());

        product.name = "   ".to_string();
        assert!(matches!(
            product.validate(),
            Err(DataValidationError::InvalidName { .. })
        ));

        product.name = "Hammer".to_string();
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_price_text_is_normalized() {
        assert_eq!(price_text(&dec("12.50")), "12.5");
        assert_eq!(price_text(&dec("12.5")), "12.5");
        assert_eq!(price_text(&dec("100.00")), "100");
        assert_eq!(price_text(&dec("0.99")), "0.99");
    }

    #[test]
    fn test_to_record_shape() {
        let mut product = Product::new(
            "Fedora".to_string(),
            "A red hat".to_string(),
            dec("12.50"),
            true,
            Category::Cloths,
        );
        product.id = Some(3);

        let record = product.to_record();
        assert_eq!(record["id"], 3);
        assert_eq!(record["name"], "Fedora");
        assert_eq!(record["description"], "A red hat");
        assert_eq!(record["price"], "12.5");
        assert_eq!(record["available"], true);
        assert_eq!(record["category"], "CLOTHS");
    }

    #[test]
    fn test_to_record_null_id_when_unpersisted() {
        let product = Product::new(
            "Fedora".to_string(),
            "A red hat".to_string(),
            dec("12.50"),
            true,
            Category::Cloths,
        );
        assert!(product.to_record()["id"].is_null());
    }

    #[test]
    fn test_record_round_trip() {
        let mut product = Product::new(
            "Wrench".to_string(),
            "Adjustable".to_string(),
            dec("24.95"),
            false,
            Category::Tools,
        );
        product.id = Some(11);

        let rebuilt = Product::from_record(product.to_record()).unwrap();
        assert_eq!(rebuilt, product);
    }

    #[test]
    fn test_from_record_accepts_numeric_price() {
        let record = serde_json::json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": 12.5,
            "available": true,
            "category": "CLOTHS",
        });

        let product = Product::from_record(record).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.price, dec("12.5"));
    }

    #[test]
    fn test_from_record_accepts_integer_price() {
        let record = serde_json::json!({
            "name": "Wrench",
            "description": "Adjustable",
            "price": 100,
            "available": false,
            "category": "TOOLS",
        });

        let product = Product::from_record(record).unwrap();
        assert_eq!(product.price, dec("100"));
    }

    #[test]
    fn test_from_record_rejects_missing_field() {
        let record = serde_json::json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.5",
            "available": true,
        });

        assert!(matches!(
            Product::from_record(record),
            Err(DataValidationError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_from_record_rejects_string_available() {
        let record = serde_json::json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.5",
            "available": "true",
            "category": "CLOTHS",
        });

        assert!(Product::from_record(record).is_err());
    }

    #[test]
    fn test_from_record_rejects_unknown_category() {
        let record = serde_json::json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.5",
            "available": true,
            "category": "GADGETS",
        });

        assert!(Product::from_record(record).is_err());
    }
}
