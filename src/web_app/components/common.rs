// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive everything via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// With `full_page` the spinner covers the whole viewport and blocks
/// interaction, which is how the pages signal an in-flight request.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
    /// Cover the whole page instead of rendering inline
    #[prop(default = false)]
    full_page: bool,
) -> impl IntoView {
    let class = if full_page {
        "fixed inset-0 z-50 bg-white/80 backdrop-blur-sm flex flex-col items-center justify-center"
    } else {
        "flex flex-col items-center justify-center p-12"
    };

    view! {
        <div class=class role="status" aria-live="polite">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Placeholder shown when a list has nothing to render
#[component]
pub fn EmptyState(
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center text-gray-500">
            <span class="block text-4xl mb-4">"📭"</span>
            <p class="font-medium">{message}</p>
        </div>
    }
}

/// Price display component
#[component]
pub fn PriceDisplay(
    /// The price value
    price: f64,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-green-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>{format_price(price)}</span>
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
