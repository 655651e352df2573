// web_app/form/mod.rs - Product creation form logic
//
// Field values, payload construction and the interpretation of a submit
// result. The Leptos component in components/form.rs only binds inputs
// to `ProductFormValues` and renders what `resolve_submission` returns.

use serde::{Deserialize, Serialize};

use crate::web_app::api::ApiError;
use crate::web_app::model::{CreateOutcome, FieldErrors, NewProduct};

/// Shown for any transport or HTTP status failure
pub const SUBMIT_FAILED_MESSAGE: &str = "❌ Failed to add product";

/// Where a submission leads, including one rejected by validation
pub const LISTING_PATH: &str = "/products";

/// How a field is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    TextArea,
}

/// Every field of the creation form, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Category,
    Price,
    DiscountPercentage,
    Rating,
    Stock,
    Tags,
    Brand,
    Sku,
    Weight,
    MinimumOrderQuantity,
    Thumbnail,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::Title,
        FormField::Description,
        FormField::Category,
        FormField::Price,
        FormField::DiscountPercentage,
        FormField::Rating,
        FormField::Stock,
        FormField::Tags,
        FormField::Brand,
        FormField::Sku,
        FormField::Weight,
        FormField::MinimumOrderQuantity,
        FormField::Thumbnail,
    ];

    /// Key used in the JSON payload and in the API's error map
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::DiscountPercentage => "discountPercentage",
            FormField::Rating => "rating",
            FormField::Stock => "stock",
            FormField::Tags => "tags",
            FormField::Brand => "brand",
            FormField::Sku => "sku",
            FormField::Weight => "weight",
            FormField::MinimumOrderQuantity => "minimumOrderQuantity",
            FormField::Thumbnail => "thumbnail",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "Product name",
            FormField::Description => "Product description",
            FormField::Category => "Category",
            FormField::Price => "Price ($)",
            FormField::DiscountPercentage => "Discount (%)",
            FormField::Rating => "Rating (0-5)",
            FormField::Stock => "Stock",
            FormField::Tags => "Tags (comma separated)",
            FormField::Brand => "Brand",
            FormField::Sku => "SKU",
            FormField::Weight => "Weight (kg)",
            FormField::MinimumOrderQuantity => "Minimum order quantity",
            FormField::Thumbnail => "Image URL",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            FormField::Description => InputKind::TextArea,
            FormField::Price
            | FormField::DiscountPercentage
            | FormField::Rating
            | FormField::Stock
            | FormField::Weight
            | FormField::MinimumOrderQuantity => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

/// Raw input of every field, as typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormValues {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub stock: String,
    pub tags: String,
    pub brand: String,
    pub sku: String,
    pub weight: String,
    pub minimum_order_quantity: String,
    pub thumbnail: String,
}

impl ProductFormValues {
    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::DiscountPercentage => &mut self.discount_percentage,
            FormField::Rating => &mut self.rating,
            FormField::Stock => &mut self.stock,
            FormField::Tags => &mut self.tags,
            FormField::Brand => &mut self.brand,
            FormField::Sku => &mut self.sku,
            FormField::Weight => &mut self.weight,
            FormField::MinimumOrderQuantity => &mut self.minimum_order_quantity,
            FormField::Thumbnail => &mut self.thumbnail,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::DiscountPercentage => &self.discount_percentage,
            FormField::Rating => &self.rating,
            FormField::Stock => &self.stock,
            FormField::Tags => &self.tags,
            FormField::Brand => &self.brand,
            FormField::Sku => &self.sku,
            FormField::Weight => &self.weight,
            FormField::MinimumOrderQuantity => &self.minimum_order_quantity,
            FormField::Thumbnail => &self.thumbnail,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn to_payload(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            discount_percentage: self.discount_percentage.clone(),
            rating: self.rating.clone(),
            stock: self.stock.clone(),
            tags: split_tags(&self.tags),
            brand: self.brand.clone(),
            sku: self.sku.clone(),
            weight: self.weight.clone(),
            minimum_order_quantity: self.minimum_order_quantity.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// `"a, b ,,c"` -> `["a", "b", "", "c"]`
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .map(str::to_string)
        .collect()
}

/// idle -> submitting -> idle | failed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What the form does once the API answered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitResolution {
    /// Go to the listing page; `errors` is shown inline if not empty
    Navigate { to: &'static str, errors: FieldErrors },
    /// Stay on the form with a generic message
    Failed { message: &'static str },
}

/// Map an API result to the form's next step
///
/// A field-keyed error map does not stop the navigation.
pub fn resolve_submission(result: Result<CreateOutcome, ApiError>) -> SubmitResolution {
    match result {
        Ok(CreateOutcome::Created(_)) => SubmitResolution::Navigate {
            to: LISTING_PATH,
            errors: FieldErrors::new(),
        },
        Ok(CreateOutcome::Rejected(errors)) => SubmitResolution::Navigate {
            to: LISTING_PATH,
            errors,
        },
        Err(err) => {
            tracing::error!("Failed to submit product: {}", err);
            SubmitResolution::Failed {
                message: SUBMIT_FAILED_MESSAGE,
            }
        }
    }
}
