// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - HomePage: Landing page with links to the other pages
// - SearchPage: Debounced product search
// - ProductsPage: Paged catalog listing
// - NewProductPage: Product creation form

pub mod home;
pub mod new_product;
pub mod products;
pub mod search;

// Re-export page components
pub use home::HomePage;
pub use new_product::NewProductPage;
pub use products::ProductsPage;
pub use search::SearchPage;

#[cfg(feature = "hydrate")]
use crate::web_app::search::BrowserUrl;
#[cfg(not(feature = "hydrate"))]
use crate::web_app::search::MemoryUrl;

/// Query string store of the current page
#[cfg(feature = "hydrate")]
pub type PageUrl = BrowserUrl;
#[cfg(not(feature = "hydrate"))]
pub type PageUrl = MemoryUrl;

/// Store for the current page's query string
///
/// The browser's address bar once hydrated; during SSR a copy of the
/// request's query parameters.
pub fn page_url() -> PageUrl {
    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            BrowserUrl
        } else {
            use leptos::prelude::*;
            use leptos_router::hooks::use_query_map;

            MemoryUrl::new(use_query_map().with_untracked(|query| query.to_query_string()))
        }
    }
}
