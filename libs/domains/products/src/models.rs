use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

/// Two-digit day, two-digit month, four-digit year, slash-separated
static EXPIRATION_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

/// Parses a `DD/MM/YYYY` expiration date.
///
/// Returns `None` when the shape is wrong or the date does not exist
/// (`31/02/2025`, `99/99/9999`).
pub fn parse_expiration(value: &str) -> Option<NaiveDate> {
    if !EXPIRATION_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, EXPIRATION_FORMAT).ok()
}

/// Product attribute names as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductField {
    Id,
    Name,
    Quantity,
    CodeValue,
    Expiration,
    Price,
}

/// Catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the repository on first save, never changes afterwards
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    /// Business code, unique across the catalog
    pub code_value: String,
    pub is_published: bool,
    /// `DD/MM/YYYY`
    #[schema(example = "01/01/2030")]
    pub expiration: String,
    pub price: f64,
}

/// Body of `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    #[schema(example = "01/01/2030")]
    pub expiration: String,
    pub price: f64,
}

impl ProductRequest {
    /// Keys that must be present in a create or full-update body.
    /// `is_published` is optional.
    pub const REQUIRED_FIELDS: [ProductField; 5] = [
        ProductField::Name,
        ProductField::Quantity,
        ProductField::CodeValue,
        ProductField::Expiration,
        ProductField::Price,
    ];

    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}

/// Body of `PATCH /products/{id}`; absent keys keep their stored value
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

/// Success envelope for create, get and update responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductEnvelope {
    #[serde(rename = "Message")]
    pub message: String,
    pub data: Product,
}

impl ProductEnvelope {
    pub fn new(message: impl Into<String>, data: Product) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl Product {
    /// Overlay the keys present in a partial update. The id is untouched.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(code_value) = update.code_value {
            self.code_value = code_value;
        }
        if let Some(is_published) = update.is_published {
            self.is_published = is_published;
        }
        if let Some(expiration) = update.expiration {
            self.expiration = expiration;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 3,
            name: "Milk".to_string(),
            quantity: 10,
            code_value: "MLK-1".to_string(),
            is_published: true,
            expiration: "01/01/2030".to_string(),
            price: 1.5,
        }
    }

    #[test]
    fn test_parse_expiration_accepts_real_dates() {
        assert_eq!(
            parse_expiration("01/01/2030"),
            NaiveDate::from_ymd_opt(2030, 1, 1)
        );
        assert_eq!(
            parse_expiration("29/02/2024"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_expiration_rejects_bad_input() {
        for bad in [
            "",
            "99/99/9999",
            "31/02/2025",
            "29/02/2023",
            "1/1/2030",
            "01/01/30",
            "2030-01-01",
            "01-01-2030",
            " 01/01/2030",
            "01/13/2030",
        ] {
            assert!(parse_expiration(bad).is_none(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_field_names_are_snake_case() {
        assert_eq!(ProductField::CodeValue.to_string(), "code_value");
        let id: &str = ProductField::Id.as_ref();
        let expiration: &str = ProductField::Expiration.as_ref();
        assert_eq!(id, "id");
        assert_eq!(expiration, "expiration");
    }

    #[test]
    fn test_apply_update_overlays_present_keys_only() {
        let mut product = sample();
        product.apply_update(UpdateProduct {
            price: Some(2.25),
            is_published: Some(false),
            ..Default::default()
        });

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Milk");
        assert_eq!(product.code_value, "MLK-1");
        assert_eq!(product.price, 2.25);
        assert!(!product.is_published);
    }

    #[test]
    fn test_request_defaults_is_published_to_false() {
        let request: ProductRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "quantity": 1,
            "code_value": "X",
            "expiration": "01/01/2030",
            "price": 9.5,
        }))
        .unwrap();

        let product = request.into_product(7);
        assert_eq!(product.id, 7);
        assert!(!product.is_published);
    }

    #[test]
    fn test_envelope_uses_capitalized_message_key() {
        let envelope = ProductEnvelope::new("Product found successfully", sample());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["Message"], "Product found successfully");
        assert_eq!(json["data"]["id"], 3);
        assert_eq!(json["data"]["code_value"], "MLK-1");
        assert!(json.get("message").is_none());
    }
}
