// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the remote product API:
// - GET  /api/products  -> ProductPage
// - POST /api/products  <- NewProduct, -> created product or ValidationErrors
//
// The API is not ours, so decoding is lenient: display fields may be
// missing, numbers may arrive as strings, unknown fields are kept.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Product as returned by the API
///
/// Only `id` is required. The search feature never interprets the record
/// beyond handing it to the presentation components.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub discount_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stock: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub minimum_order_quantity: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Fields this crate does not know about
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Title for display, falling back to the id
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Product #{}", self.id),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
}

/// Accepts `12.5`, `"12.5"` or `null`; unparseable text becomes `None`
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// One page of the search/list endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub data: Vec<Product>,
    #[serde(default)]
    pub last_page: u32,
}

/// Items and page count currently shown by a page
///
/// Replaced wholesale on every applied response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pub items: Vec<Product>,
    pub total_pages: u32,
}

impl ResultSet {
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_pages = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<ProductPage> for ResultSet {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.data,
            total_pages: page.last_page,
        }
    }
}

/// Creation payload, sent exactly as the form collected it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub stock: String,
    pub tags: Vec<String>,
    pub brand: String,
    pub sku: String,
    pub weight: String,
    pub minimum_order_quantity: String,
    pub thumbnail: String,
}

/// Field name -> first message, ready for inline display
pub type FieldErrors = BTreeMap<String, String>;

/// `{ "errors": { "field": ["message", ...] } }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Keep the first message of every field; fields without one are dropped
    pub fn first_messages(&self) -> FieldErrors {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|message| (field.clone(), message.clone()))
            })
            .collect()
    }
}

/// Result of a create call that reached the API with a success status
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    /// Created resource, as returned by the API
    Created(serde_json::Value),
    /// The body carried a field-keyed error map
    Rejected(FieldErrors),
}

impl CreateOutcome {
    /// Interpret a success body: an `errors` object means rejection
    pub fn from_body(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        if body.get("errors").is_some_and(serde_json::Value::is_object) {
            let errors: ValidationErrors = serde_json::from_value(body)?;
            Ok(Self::Rejected(errors.first_messages()))
        } else {
            Ok(Self::Created(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_numbers_and_strings() {
        let json = r#"{
            "id": 7,
            "title": "Desk Lamp",
            "price": "19.50",
            "rating": 4.2,
            "stock": null,
            "tags": ["home"],
            "created_at": "2024-01-01"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.price, Some(19.5));
        assert_eq!(product.rating, Some(4.2));
        assert_eq!(product.stock, None);
        assert_eq!(product.tags, vec!["home"]);
        assert!(product.extra.contains_key("created_at"));
    }

    #[test]
    fn test_product_unparseable_number_is_none() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "weight": "heavy"}"#).unwrap();
        assert_eq!(product.weight, None);
    }

    #[test]
    fn test_display_title_fallback() {
        let product = Product { id: 42, title: Some("  ".into()), ..Product::default() };
        assert_eq!(product.display_title(), "Product #42");
    }

    #[test]
    fn test_result_set_from_page() {
        let page = ProductPage {
            data: vec![Product { id: 1, ..Product::default() }],
            last_page: 4,
        };
        let mut results = ResultSet::from(page);
        assert_eq!(results.total_pages, 4);
        assert!(!results.is_empty());

        results.clear();
        assert!(results.is_empty());
        assert_eq!(results.total_pages, 0);
    }

    #[test]
    fn test_first_messages() {
        let mut errors = ValidationErrors::default();
        errors.errors.insert("title".into(), vec!["required".into(), "too short".into()]);
        errors.errors.insert("sku".into(), vec![]);

        let first = errors.first_messages();
        assert_eq!(first.get("title").map(String::as_str), Some("required"));
        assert!(!first.contains_key("sku"));
    }

    #[test]
    fn test_new_product_serializes_camel_case() {
        let payload = NewProduct {
            discount_percentage: "5".into(),
            minimum_order_quantity: "2".into(),
            ..NewProduct::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["discountPercentage"], "5");
        assert_eq!(json["minimumOrderQuantity"], "2");
        assert!(json["tags"].is_array());
    }
}
