// fixtures/mod.rs - Canned API payloads
//
// Tests and the CLI probe need realistic bodies of the remote product
// API without talking to it. Each fixture is a struct implementing
// `ApiFixture`, so a test can pick one by type.

pub mod products;

pub use products::{
    product, product_page, CreatedProduct, RejectedProduct, SearchPageOne, SearchPageStringNumbers,
};

/// A canned response body of the product API
pub trait ApiFixture {
    /// HTTP status the API answers with
    fn status() -> u16 {
        200
    }

    /// JSON body
    fn body() -> &'static str;
}
