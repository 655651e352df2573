// web_app/api/mod.rs - Client side of the remote product API
//
// The API itself is an external collaborator. This module only speaks
// its contract: a paginated search/list endpoint and a create endpoint.

pub mod client;
pub mod error;

pub use client::{search_params, HttpProductApi, ProductApi};
pub use error::ApiError;
