// tests/product_form_tests.rs - Creation form payload and submission outcome

use product_catalog::fixtures::{ApiFixture, CreatedProduct, RejectedProduct};
use product_catalog::web_app::api::ApiError;
use product_catalog::web_app::form::{
    resolve_submission, split_tags, FormField, FormStatus, ProductFormValues, SubmitResolution,
    LISTING_PATH, SUBMIT_FAILED_MESSAGE,
};
use product_catalog::web_app::model::CreateOutcome;
use serde_json::json;

fn filled_form() -> ProductFormValues {
    let mut values = ProductFormValues::default();
    values.set(FormField::Title, "Tea Cup");
    values.set(FormField::Description, "Porcelain cup");
    values.set(FormField::Category, "kitchen");
    values.set(FormField::Price, "3.5");
    values.set(FormField::DiscountPercentage, "10");
    values.set(FormField::Rating, "4.5");
    values.set(FormField::Stock, "120");
    values.set(FormField::Tags, "kitchen, tea ,,  cups");
    values.set(FormField::Brand, "Mugly");
    values.set(FormField::Sku, "CUP-001");
    values.set(FormField::Weight, "0.3");
    values.set(FormField::MinimumOrderQuantity, "6");
    values.set(FormField::Thumbnail, "https://cdn.example.test/cup.png");
    values
}

fn outcome<F: ApiFixture>() -> CreateOutcome {
    let body = serde_json::from_str(F::body()).expect("fixture is valid JSON");
    CreateOutcome::from_body(body).expect("fixture decodes")
}

#[test]
fn test_tags_are_split_and_trimmed() {
    assert_eq!(split_tags("a, b ,,c"), ["a", "b", "", "c"]);
    assert_eq!(split_tags("a,,b"), ["a", "", "b"]);
    // Empty segments are sent as entered
    assert_eq!(split_tags(""), [""]);
    assert_eq!(split_tags(" , ,"), ["", "", ""]);
}

#[test]
fn test_payload_uses_api_field_names() {
    let payload = serde_json::to_value(filled_form().to_payload()).expect("serializes");

    assert_eq!(
        payload,
        json!({
            "title": "Tea Cup",
            "description": "Porcelain cup",
            "category": "kitchen",
            "price": "3.5",
            "discountPercentage": "10",
            "rating": "4.5",
            "stock": "120",
            "tags": ["kitchen", "tea", "", "cups"],
            "brand": "Mugly",
            "sku": "CUP-001",
            "weight": "0.3",
            "minimumOrderQuantity": "6",
            "thumbnail": "https://cdn.example.test/cup.png"
        })
    );
}

#[test]
fn test_every_field_name_appears_in_payload() {
    let payload = serde_json::to_value(ProductFormValues::default().to_payload()).expect("serializes");
    let object = payload.as_object().expect("object");

    for field in FormField::ALL {
        assert!(object.contains_key(field.name()), "missing {}", field.name());
    }
    assert_eq!(object.len(), FormField::ALL.len());
}

#[test]
fn test_created_navigates_to_listing() {
    let resolution = resolve_submission(Ok(outcome::<CreatedProduct>()));
    match resolution {
        SubmitResolution::Navigate { to, errors } => {
            assert_eq!(to, LISTING_PATH);
            assert!(errors.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_validation_errors_still_navigate() {
    let resolution = resolve_submission(Ok(outcome::<RejectedProduct>()));
    match resolution {
        SubmitResolution::Navigate { to, errors } => {
            assert_eq!(to, "/products");
            assert_eq!(
                errors.get("title").map(String::as_str),
                Some("The title field is required.")
            );
            assert_eq!(
                errors.get("price").map(String::as_str),
                Some("The price must be a number.")
            );
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_status_failure_shows_generic_message() {
    let resolution = resolve_submission(Err(ApiError::Status(422)));
    assert_eq!(
        resolution,
        SubmitResolution::Failed {
            message: SUBMIT_FAILED_MESSAGE
        }
    );
}

#[test]
fn test_failure_keeps_form_values() {
    let values = filled_form();
    let status = match resolve_submission(Err(ApiError::Status(500))) {
        SubmitResolution::Failed { message } => FormStatus::Failed(message.to_string()),
        SubmitResolution::Navigate { .. } => FormStatus::Idle,
    };

    assert_eq!(status.message(), Some(SUBMIT_FAILED_MESSAGE));
    // Nothing resets the values on failure
    assert_eq!(values.get(FormField::Title), "Tea Cup");
    assert_eq!(values, filled_form());
}
