// web_app/components/product.rs - Product display components
//
// - ProductCard: Grid card for one product
// - ProductList: Grid of cards, or an empty state

use leptos::prelude::*;

use super::common::{EmptyState, PriceDisplay};
use crate::web_app::model::Product;

/// Shorten `text` to at most `max` characters, adding an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    } else {
        text.to_string()
    }
}

/// Product card for the results grid
#[component]
pub fn ProductCard(
    product: Product,
) -> impl IntoView {
    let title = product.display_title();
    let description = product
        .description
        .as_deref()
        .map(|text| truncate(text, 120))
        .unwrap_or_default();
    let thumbnail = product.thumbnail.clone().filter(|url| !url.is_empty());
    let alt = title.clone();

    view! {
        <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                    transition-all duration-300 border border-gray-100 \
                    flex flex-col h-full overflow-hidden">
            <div class="h-48 bg-gray-100 flex items-center justify-center text-gray-300 overflow-hidden">
                {match thumbnail {
                    Some(src) => view! {
                        <img src=src alt=alt class="h-full w-full object-cover" loading="lazy" />
                    }.into_any(),
                    None => view! { <span class="text-4xl">"📦"</span> }.into_any(),
                }}
            </div>

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3 gap-2">
                    <h3 class="font-bold text-gray-900 line-clamp-2 text-lg group-hover:text-blue-600 transition-colors">
                        {title}
                    </h3>
                    {product.price.map(|price| view! { <PriceDisplay price=price highlight=true /> })}
                </div>

                <p class="text-gray-600 text-sm mb-4 line-clamp-3 flex-1">{description}</p>

                <div class="flex justify-between items-center text-xs text-gray-500 pt-3 border-t border-gray-100">
                    <span class="font-medium bg-gray-100 px-2 py-1 rounded text-gray-600">
                        {product.brand.clone().unwrap_or_default()}
                    </span>
                    <span class="text-gray-400">{product.category.clone().unwrap_or_default()}</span>
                </div>

                {product.rating.map(|rating| view! {
                    <div class="mt-2 text-sm text-yellow-500 font-medium">
                        "★ " {format!("{:.1}", rating)}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Grid of product cards
#[component]
pub fn ProductList(
    products: Signal<Vec<Product>>,
    /// Shown when `products` is empty
    #[prop(default = "No products found")]
    empty_message: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|items| !items.is_empty())
            fallback=move || view! { <EmptyState message=empty_message /> }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}
