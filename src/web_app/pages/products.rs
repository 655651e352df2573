// web_app/pages/products.rs - Catalog listing page
//
// Pages through the whole catalog. `page` and `per_page` live in the URL
// exactly as on the search page; there is no text and no debounce, every
// change fetches right away.

use leptos::prelude::*;

use super::{page_url, PageUrl};
use crate::config::CatalogConfig;
use crate::web_app::api::HttpProductApi;
use crate::web_app::components::*;
use crate::web_app::model::Product;
use crate::web_app::search::{QueryStateManager, SearchQueryState};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let window = config.page_window;
    let base_url = config.api_base_url.clone();

    let manager: StoredValue<QueryStateManager<PageUrl>> =
        StoredValue::new(QueryStateManager::load(page_url(), config.default_per_page));
    let query = RwSignal::new(manager.with_value(|manager| manager.state().clone()));

    let items = RwSignal::new(Vec::<Product>::new());
    let total_pages = RwSignal::new(0_u32);
    let failure = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    // Publish the manager's state; the resource refetches on change
    let publish = move |changed: bool| {
        if changed {
            if let Some(state) = manager.try_with_value(|manager| manager.state().clone()) {
                loading.set(true);
                query.set(state);
            }
        }
    };

    let listing = LocalResource::new(move || {
        let SearchQueryState { page, page_size, .. } = query.get();
        let api = HttpProductApi::new(base_url.clone());
        async move {
            api.list(page, page_size).await.map_err(|err| {
                tracing::error!("Failed to load products: {}", err);
                err.to_string()
            })
        }
    });

    Effect::new(move |_| {
        manager.update_value(|manager| manager.sync());
    });

    Effect::new(move |_| {
        let Some(result) = listing.get() else {
            return;
        };
        loading.set(false);
        match result {
            Ok(page) => {
                failure.set(None);
                total_pages.set(page.last_page);
                items.set(page.data);
                let clamped = manager
                    .try_update_value(|manager| manager.set_total_pages(page.last_page))
                    .unwrap_or(false);
                publish(clamped);
            }
            Err(message) => failure.set(Some(message)),
        }
    });

    let on_page = Callback::new(move |page: u32| {
        publish(manager.try_update_value(|manager| manager.set_page(page)).unwrap_or(false));
    });
    let on_page_size = Callback::new(move |size: u32| {
        publish(manager.try_update_value(|manager| manager.set_page_size(size)).unwrap_or(false));
    });

    let current_page = Signal::derive(move || query.with(|state| state.page));
    let page_size = Signal::derive(move || query.with(|state| state.page_size));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="flex flex-wrap justify-between items-center gap-4 mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"All products"</h1>
                <div class="flex items-center gap-4">
                    <PageSizeSelect page_size=page_size on_change=on_page_size />
                    <a
                        href="/new-product"
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-semibold"
                    >
                        "Add product"
                    </a>
                </div>
            </div>

            <Show when=move || loading.get()>
                <Loading message="Loading products..." full_page=true />
            </Show>

            {move || failure.get().map(|error| view! {
                <div class="mb-6"><ErrorDisplay error=error /></div>
            })}

            <ProductList products=items.into() empty_message="The catalog is empty" />

            <Show when=move || { total_pages.get() > 0 }>
                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages.into()
                    window=window
                    on_select=on_page
                />
            </Show>
        </div>
    }
}
