// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared configuration and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::CatalogConfig;
use crate::web_app::pages::{HomePage, NewProductPage, ProductsPage, SearchPage};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The `CatalogConfig` context (the server provides one read from the
///   environment; the client falls back to compiled-in defaults)
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    if use_context::<CatalogConfig>().is_none() {
        provide_context(CatalogConfig::default());
    }

    view! {
        <Title text="Product Catalog" />
        <Meta name="description" content="Browse, search and add products" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/product_catalog.css" />

        <Router>
            <NavBar />
            <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/new-product") view=NewProductPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-6">
                <A href="/" attr:class="text-xl font-bold text-blue-600">"📦 Catalog"</A>
                <A href="/products" attr:class="text-gray-600 hover:text-blue-600">"Products"</A>
                <A href="/search" attr:class="text-gray-600 hover:text-blue-600">"Search"</A>
                <A href="/new-product" attr:class="text-gray-600 hover:text-blue-600">"New product"</A>
            </nav>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Home"
                </a>
            </div>
        </div>
    }
}
