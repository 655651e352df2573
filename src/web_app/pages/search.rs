// web_app/pages/search.rs - Search page component
//
// Binds the SearchController to the DOM. The controller owns all search
// state; this page only runs the debounce timer, performs the fetch the
// controller asks for and publishes a snapshot for rendering.

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{page_url, PageUrl};
use crate::config::CatalogConfig;
use crate::web_app::api::{HttpProductApi, ProductApi};
use crate::web_app::components::*;
use crate::web_app::search::{SearchController, SearchSnapshot, Ticket, Trigger};

/// Reactive handles shared by every callback of the page
#[derive(Clone, Copy)]
struct SearchHandles {
    controller: StoredValue<SearchController<PageUrl>>,
    timer: StoredValue<Option<TimeoutHandle>>,
    view: RwSignal<SearchSnapshot>,
    api_base_url: StoredValue<String>,
}

impl SearchHandles {
    fn new(config: &CatalogConfig) -> Self {
        let controller = SearchController::new(page_url(), config.trigger());
        let view = RwSignal::new(controller.snapshot());
        Self {
            controller: StoredValue::new(controller),
            timer: StoredValue::new(None),
            view,
            api_base_url: StoredValue::new(config.api_base_url.clone()),
        }
    }

    /// Run `change` on the controller and act on its trigger
    fn update(self, change: impl FnOnce(&mut SearchController<PageUrl>) -> Trigger) {
        if let Some(trigger) = self.controller.try_update_value(change) {
            self.dispatch(trigger);
        }
    }

    fn dispatch(self, trigger: Trigger) {
        self.publish();
        match trigger {
            Trigger::Schedule(ticket) => self.schedule(ticket),
            Trigger::Cleared => self.cancel_timer(),
            Trigger::Idle => {}
        }
    }

    fn publish(self) {
        if let Some(snapshot) = self.controller.try_with_value(|search| search.snapshot()) {
            self.view.set(snapshot);
        }
    }

    fn cancel_timer(self) {
        if let Some(Some(handle)) = self.timer.try_update_value(Option::take) {
            handle.clear();
        }
    }

    fn schedule(self, ticket: Ticket) {
        self.cancel_timer();
        match set_timeout_with_handle(move || self.fire(ticket), ticket.delay) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(err) => tracing::error!("Failed to schedule search: {:?}", err),
        }
    }

    fn fire(self, ticket: Ticket) {
        self.timer.set_value(None);
        let Some(Some(request)) = self.controller.try_update_value(|search| search.fire(ticket)) else {
            return;
        };
        self.publish();

        let api = HttpProductApi::new(self.api_base_url.get_value());
        spawn_local(async move {
            let result = api.search(&request.query).await;
            // The page may be gone by now; the stored controller is then disposed
            if let Some(applied) = self
                .controller
                .try_update_value(|search| search.apply(&request, result))
            {
                self.dispatch(applied.trigger());
            }
        });
    }
}

/// Main search page component
///
/// Typing schedules a search after the debounce interval; `q`, `page`
/// and `per_page` are mirrored into the address bar without adding
/// history entries.
#[component]
pub fn SearchPage() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let window = config.page_window;
    let min_query_len = config.min_query_len;
    let handles = SearchHandles::new(&config);
    let view_state = handles.view;

    // Effects only run once hydrated, so SSR never touches a timer
    Effect::new(move |_| handles.update(|search| search.mount()));
    on_cleanup(move || handles.cancel_timer());

    let on_input = Callback::new(move |text: String| handles.update(|search| search.set_text(text)));
    let on_page = Callback::new(move |page: u32| handles.update(|search| search.set_page(page)));
    let on_page_size =
        Callback::new(move |size: u32| handles.update(|search| search.set_page_size(size)));

    let text = Signal::derive(move || view_state.with(|snapshot| snapshot.query.text.clone()));
    let current_page = Signal::derive(move || view_state.with(|snapshot| snapshot.query.page));
    let page_size = Signal::derive(move || view_state.with(|snapshot| snapshot.query.page_size));
    let total_pages =
        Signal::derive(move || view_state.with(|snapshot| snapshot.results.total_pages));
    let products = Signal::derive(move || view_state.with(|snapshot| snapshot.results.items.clone()));
    let loading = move || view_state.with(|snapshot| snapshot.loading);
    let search_mode = move || view_state.with(|snapshot| snapshot.search_mode);

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="max-w-3xl mx-auto mb-10 text-center">
                <h1 class="text-4xl font-extrabold text-gray-900 mb-4">"Search products"</h1>
                <SearchBar text=text on_input=on_input />
            </div>

            <Show when=loading>
                <Loading message="Searching products..." full_page=true />
            </Show>

            <Show
                when=search_mode
                fallback=move || view! {
                    <p class="text-center text-gray-500">
                        {format!("Type at least {} characters to search", min_query_len)}
                    </p>
                }
            >
                <div class="flex justify-between items-center mb-6">
                    <span class="text-sm text-gray-500">
                        {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
                    </span>
                    <PageSizeSelect page_size=page_size on_change=on_page_size />
                </div>

                <ProductList products=products empty_message="No products match your search" />

                <Show when=move || { total_pages.get() > 0 }>
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        window=window
                        on_select=on_page
                    />
                </Show>
            </Show>
        </div>
    }
}
