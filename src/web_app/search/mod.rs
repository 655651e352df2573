// web_app/search/mod.rs - Search page core
//
// Everything here is UI-agnostic:
// - state.rs: SearchQueryState and its query-string codec
// - url.rs: Where the query string lives (browser address bar or memory)
// - manager.rs: QueryStateManager, the single write path to the URL
// - debounce.rs: Debounce tickets and request sequence numbers
// - controller.rs: SearchController, the debounced search trigger
// - pagination.rs: Pagination window builder
// - session.rs: Tokio driver for the controller (native only)

pub mod controller;
pub mod debounce;
pub mod manager;
pub mod pagination;
pub mod state;
pub mod url;

#[cfg(feature = "native")]
pub mod session;

pub use controller::{Applied, SearchController, SearchRequest, SearchSnapshot, TriggerConfig};
pub use debounce::{DebounceGate, RequestSequencer, Ticket, Trigger};
pub use manager::QueryStateManager;
pub use pagination::{build_page_window, Edge, PageControl, DEFAULT_WINDOW};
pub use state::{
    is_search_text, QueryParams, SearchQueryState, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    MIN_QUERY_LEN, PARAM_PAGE, PARAM_PER_PAGE, PARAM_TEXT,
};
pub use url::{BrowserUrl, MemoryUrl, UrlStore};
