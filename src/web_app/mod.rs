// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Wire types of the remote product API and the result set
// - api/: HTTP client for the product API (server and WASM)
// - search/: Query state, debounced trigger and pagination window (no UI)
// - form/: Creation form values, payload and submission outcome (no UI)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod api;

pub mod search;

pub mod form;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
