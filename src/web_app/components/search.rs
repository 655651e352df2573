// web_app/components/search.rs - Search-related UI components
//
// These components handle the search interface including:
// - SearchBar: Text input; every keystroke is reported, debouncing is
//   the controller's job
// - PageSizeSelect: Items per page
// - PaginationControls: Page buttons built by the pagination window

use leptos::prelude::*;

use crate::web_app::search::{build_page_window, PageControl};

/// Page sizes offered by the selector
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Search bar component
#[component]
pub fn SearchBar(
    /// Current search text
    text: Signal<String>,
    /// Called with the new text on every input event
    on_input: Callback<String>,
    #[prop(default = "Enter a product name...")]
    placeholder: &'static str,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex gap-4 mb-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder=placeholder
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || text.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                           hover:bg-blue-700 active:bg-blue-800 transition-all \
                           font-semibold shadow-md"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}

/// Items-per-page selector
#[component]
pub fn PageSizeSelect(
    page_size: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Per page:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || page_size.get() == size
                        >
                            {size}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// CSS classes of a page button
pub fn page_button_class(active: bool) -> &'static str {
    if active {
        "page-number active min-w-10 px-3 py-2 rounded-lg bg-blue-600 text-white font-bold shadow-sm"
    } else {
        "page-number min-w-10 px-3 py-2 rounded-lg bg-white border border-gray-200 \
         text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
    }
}

/// Pagination component
///
/// Renders the window computed by `build_page_window`: page 1, a leading
/// gap, the pages around the current one, a trailing gap and the last page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    current_page: Signal<u32>,
    total_pages: Signal<u32>,
    /// Buttons around the current page
    window: u32,
    on_select: Callback<u32>,
) -> impl IntoView {
    let controls = move || build_page_window(current_page.get(), total_pages.get(), window);

    view! {
        <nav class="flex items-center justify-center gap-2 mt-12 mb-8" aria-label="Pagination">
            {move || controls().into_iter().map(|control| match control {
                PageControl::Page { number, active } => view! {
                    <button
                        type="button"
                        class=page_button_class(active)
                        aria-current=if active { Some("page") } else { None }
                        on:click=move |_| on_select.run(number)
                    >
                        {number}
                    </button>
                }.into_any(),
                PageControl::Ellipsis(_) => view! {
                    <span class="px-2 text-gray-400 select-none">"..."</span>
                }.into_any(),
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_button_class() {
        assert!(page_button_class(true).contains("active"));
        assert!(!page_button_class(false).contains("active"));
    }

    #[test]
    fn test_default_page_size_is_offered() {
        assert!(PAGE_SIZE_OPTIONS.contains(&crate::web_app::search::DEFAULT_PAGE_SIZE));
    }
}
