// web_app/search/controller.rs - Debounced Search Trigger
//
// SearchController ties the query state, the result set and the debounce
// gate together, without doing any I/O itself. A driver feeds it user
// input and timer/network events and acts on what it returns:
//
//   set_text/set_page/set_page_size -> Trigger (schedule or cancel a timer)
//   fire(ticket)                    -> Option<SearchRequest> (issue one GET)
//   apply(request, result)          -> Applied (maybe another Trigger)

use std::time::Duration;

use super::debounce::{DebounceGate, RequestSequencer, Ticket, Trigger};
use super::manager::QueryStateManager;
use super::pagination::{build_page_window, PageControl};
use super::state::{SearchQueryState, DEFAULT_PAGE_SIZE, MIN_QUERY_LEN};
use super::url::UrlStore;
use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::web_app::api::ApiError;
use crate::web_app::model::{ProductPage, ResultSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Quiet period before a fetch
    pub delay: Duration,
    pub min_query_len: usize,
    pub default_page_size: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: MIN_QUERY_LEN,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A fetch the driver must perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: SearchQueryState,
}

/// Outcome of applying a response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Results replaced; the trigger is `Schedule` when the page was clamped
    Updated(Trigger),
    /// Request failed, previous results kept
    Failed,
    /// A newer response was already applied
    Stale,
}

impl Applied {
    pub fn trigger(self) -> Trigger {
        match self {
            Applied::Updated(trigger) => trigger,
            Applied::Failed | Applied::Stale => Trigger::Idle,
        }
    }
}

/// Everything a view needs to render the search page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSnapshot {
    pub query: SearchQueryState,
    pub results: ResultSet,
    pub loading: bool,
    pub search_mode: bool,
}

#[derive(Clone, Debug)]
pub struct SearchController<U> {
    manager: QueryStateManager<U>,
    results: ResultSet,
    loading: bool,
    gate: DebounceGate,
    sequencer: RequestSequencer,
    config: TriggerConfig,
}

impl<U: UrlStore> SearchController<U> {
    pub fn new(url: U, config: TriggerConfig) -> Self {
        Self {
            manager: QueryStateManager::load(url, config.default_page_size),
            results: ResultSet::default(),
            loading: false,
            gate: DebounceGate::default(),
            sequencer: RequestSequencer::default(),
            config,
        }
    }

    /// First observation after the page is shown
    pub fn mount(&mut self) -> Trigger {
        self.manager.sync();
        self.observe()
    }

    pub fn state(&self) -> &SearchQueryState {
        self.manager.state()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_mode(&self) -> bool {
        self.state().is_search_mode(self.config.min_query_len)
    }

    pub fn url(&self) -> &U {
        self.manager.url()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            query: self.state().clone(),
            results: self.results.clone(),
            loading: self.loading,
            search_mode: self.search_mode(),
        }
    }

    pub fn page_window(&self, window: u32) -> Vec<PageControl> {
        build_page_window(self.state().page, self.results.total_pages, window)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Trigger {
        if self.manager.set_text(text) {
            self.observe()
        } else {
            Trigger::Idle
        }
    }

    pub fn set_page(&mut self, page: u32) -> Trigger {
        if self.manager.set_page(page) {
            self.observe()
        } else {
            Trigger::Idle
        }
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Trigger {
        if self.manager.set_page_size(page_size) {
            self.observe()
        } else {
            Trigger::Idle
        }
    }

    /// React to a change of text, page or page size
    ///
    /// In search mode a new ticket supersedes the pending one. Below the
    /// threshold results are emptied, `q` leaves the URL and any response
    /// still in flight is dropped.
    pub fn observe(&mut self) -> Trigger {
        if self.search_mode() {
            return Trigger::Schedule(self.gate.arm(self.config.delay));
        }

        self.gate.cancel();
        self.sequencer.invalidate();
        self.loading = false;
        self.results.clear();
        self.manager.clear_text();
        Trigger::Cleared
    }

    /// The timer for `ticket` elapsed
    pub fn fire(&mut self, ticket: Ticket) -> Option<SearchRequest> {
        if !self.gate.take(ticket) {
            tracing::trace!("Ignoring superseded ticket {}", ticket.id);
            return None;
        }
        if !self.search_mode() {
            return None;
        }

        let seq = self.sequencer.next();
        self.loading = true;
        let query = self.state().clone();
        tracing::debug!("Issuing search #{}: {:?}", seq, query);
        Some(SearchRequest { seq, query })
    }

    pub fn apply(
        &mut self,
        request: &SearchRequest,
        result: Result<ProductPage, ApiError>,
    ) -> Applied {
        if self.sequencer.is_latest(request.seq) {
            self.loading = false;
        }

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::error!("Search #{} failed: {}", request.seq, err);
                return Applied::Failed;
            }
        };

        if !self.sequencer.accept(request.seq) {
            tracing::debug!("Discarding stale response #{}", request.seq);
            return Applied::Stale;
        }

        tracing::info!(
            "Search #{} found {} items on page {} of {}",
            request.seq,
            page.data.len(),
            request.query.page,
            page.last_page
        );
        self.results = ResultSet::from(page);
        self.manager.commit_text(&request.query.text);

        if self.manager.set_total_pages(self.results.total_pages) {
            Applied::Updated(self.observe())
        } else {
            Applied::Updated(Trigger::Idle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::search::url::MemoryUrl;

    fn controller(query: &str) -> SearchController<MemoryUrl> {
        SearchController::new(MemoryUrl::new(query), TriggerConfig::default())
    }

    fn ticket(trigger: Trigger) -> Ticket {
        match trigger {
            Trigger::Schedule(ticket) => ticket,
            other => panic!("expected a scheduled fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_mount_with_query_schedules() {
        let mut search = controller("q=lamp&page=2");
        let ticket = ticket(search.mount());
        assert_eq!(ticket.delay, Duration::from_millis(500));

        let request = search.fire(ticket).unwrap();
        assert_eq!(request.query.text, "lamp");
        assert_eq!(request.query.page, 2);
        assert!(search.is_loading());
    }

    #[test]
    fn test_mount_without_query_clears() {
        let mut search = controller("q=ab");
        assert_eq!(search.mount(), Trigger::Cleared);
        assert_eq!(search.url().query(), "page=1&per_page=10");
    }

    #[test]
    fn test_fire_after_text_became_short() {
        let mut search = controller("");
        let pending = ticket(search.set_text("lamp"));
        assert_eq!(search.set_text("la"), Trigger::Cleared);
        assert!(search.fire(pending).is_none());
    }

    #[test]
    fn test_clamped_page_reschedules() {
        let mut search = controller("q=lamp&page=9");
        let first = ticket(search.mount());
        let request = search.fire(first).unwrap();

        let page = ProductPage { data: vec![], last_page: 3 };
        let trigger = search.apply(&request, Ok(page)).trigger();

        assert_eq!(search.state().page, 3);
        assert!(matches!(trigger, Trigger::Schedule(_)));
    }

    #[test]
    fn test_applied_trigger_for_failure_is_idle() {
        assert_eq!(Applied::Failed.trigger(), Trigger::Idle);
        assert_eq!(Applied::Stale.trigger(), Trigger::Idle);
    }
}
