// fixtures/products.rs
//
// Search and create payloads shaped like the real API, plus helpers to
// build pages of products in code.

use crate::fixtures::ApiFixture;
use crate::web_app::model::{Product, ProductPage};

/// Product with only an id and a title
pub fn product(id: i64, title: &str) -> Product {
    Product {
        id,
        title: Some(title.to_string()),
        ..Product::default()
    }
}

/// `count` products titled after `prefix`, ids starting at 1
pub fn product_page(prefix: &str, count: usize, last_page: u32) -> ProductPage {
    ProductPage {
        data: (1..=count as i64)
            .map(|id| product(id, &format!("{} {}", prefix, id)))
            .collect(),
        last_page,
    }
}

/// First page of a search for "lamp", three pages in total
pub struct SearchPageOne;

impl ApiFixture for SearchPageOne {
    fn body() -> &'static str {
        r#"{
            "current_page": 1,
            "data": [
                {
                    "id": 11,
                    "title": "Desk Lamp",
                    "description": "Adjustable LED desk lamp",
                    "category": "home-decoration",
                    "price": 24.99,
                    "discountPercentage": 5.5,
                    "rating": 4.6,
                    "stock": 30,
                    "tags": ["lighting", "desk"],
                    "brand": "Lumo",
                    "sku": "LMP-011",
                    "thumbnail": "https://cdn.example.test/lamp.png"
                },
                {
                    "id": 12,
                    "title": "Floor Lamp",
                    "category": "home-decoration",
                    "price": 89.0,
                    "rating": 4.1,
                    "stock": 4,
                    "tags": []
                }
            ],
            "last_page": 3,
            "per_page": 2,
            "total": 6
        }"#
    }
}

/// Same shape, numeric fields encoded as strings
pub struct SearchPageStringNumbers;

impl ApiFixture for SearchPageStringNumbers {
    fn body() -> &'static str {
        r#"{
            "data": [
                { "id": 3, "title": "Kettle", "price": "15.00", "rating": "4.0", "stock": "12" }
            ],
            "last_page": 1
        }"#
    }
}

/// Created resource echoed back by the create endpoint
pub struct CreatedProduct;

impl ApiFixture for CreatedProduct {
    fn status() -> u16 {
        201
    }

    fn body() -> &'static str {
        r#"{ "id": 101, "title": "Tea Cup", "price": "3.5", "tags": ["kitchen"] }"#
    }
}

/// Success status carrying a field-keyed error map
pub struct RejectedProduct;

impl ApiFixture for RejectedProduct {
    fn body() -> &'static str {
        r#"{
            "message": "The given data was invalid.",
            "errors": {
                "title": ["The title field is required.", "The title must be a string."],
                "price": ["The price must be a number."]
            }
        }"#
    }
}
