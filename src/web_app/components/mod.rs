// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, EmptyState)
// - search.rs: Search bar, page-size selector and pagination controls
// - product.rs: Product card and list
// - form.rs: Product creation form

pub mod common;
pub mod form;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;
pub use search::*;
