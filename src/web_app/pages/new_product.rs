// web_app/pages/new_product.rs - Product creation page

use leptos::prelude::*;

use crate::web_app::components::ProductForm;

#[component]
pub fn NewProductPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"Add a new product"</h1>
            <ProductForm submit_title="Add product" />
        </div>
    }
}
