// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

#[component]
fn HomeLink(href: &'static str, icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="block bg-white rounded-2xl p-8 shadow-sm border border-gray-100 \
                   hover:shadow-xl hover:border-blue-200 transition-all"
        >
            <span class="text-4xl">{icon}</span>
            <h2 class="mt-4 text-xl font-bold text-gray-900">{title}</h2>
            <p class="mt-2 text-gray-600">{text}</p>
        </a>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto px-4 py-16">
            <h1 class="text-4xl font-extrabold text-gray-900 mb-4">"Product Catalog"</h1>
            <p class="text-lg text-gray-600 mb-12">
                "Browse the catalog, search it as you type or add a new product."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <HomeLink href="/search" icon="🔍" title="Search" text="Find products by name" />
                <HomeLink href="/products" icon="📦" title="Products" text="Page through the whole catalog" />
                <HomeLink href="/new-product" icon="➕" title="New product" text="Add a product to the catalog" />
            </div>
        </div>
    }
}
