// web_app/search/manager.rs - Query State Manager
//
// Owns the in-memory SearchQueryState and keeps the URL in step with it.
// All URL writes go through `write_url`, always with replace semantics.

use super::state::{QueryParams, SearchQueryState};
use super::url::UrlStore;

#[derive(Clone, Debug)]
pub struct QueryStateManager<U> {
    url: U,
    /// Last written parameters; keys we do not own are kept as they were
    params: QueryParams,
    state: SearchQueryState,
    /// Value of `q` in the URL, committed after a successful fetch
    committed_text: Option<String>,
    /// Known once a result set exists
    total_pages: Option<u32>,
}

impl<U: UrlStore> QueryStateManager<U> {
    /// Seed state from the URL (`q`, `page`, `per_page`)
    ///
    /// Nothing is written until the first setter or `sync`.
    pub fn load(url: U, default_page_size: u32) -> Self {
        let params = QueryParams::parse(&url.query());
        let state = SearchQueryState::from_params(&params, default_page_size);
        let committed_text = params.get(super::state::PARAM_TEXT).map(str::to_string);

        Self {
            url,
            params,
            state,
            committed_text,
            total_pages: None,
        }
    }

    pub fn state(&self) -> &SearchQueryState {
        &self.state
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns whether the text changed
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.state.text {
            return false;
        }
        self.state.text = text;
        self.write_url();
        true
    }

    /// Returns whether the page changed
    ///
    /// Once a result set exists the page is clamped to
    /// `[1, max(1, total_pages)]`; before that only 0 is corrected.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = self.clamp_page(page);
        if page == self.state.page {
            return false;
        }
        self.state.page = page;
        self.write_url();
        true
    }

    /// Returns whether the page size changed; 0 is rejected
    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        if page_size == 0 || page_size == self.state.page_size {
            return false;
        }
        self.state.page_size = page_size;
        self.write_url();
        true
    }

    /// Put `text` into the URL as `q`
    pub fn commit_text(&mut self, text: &str) {
        self.committed_text = Some(text.to_string());
        self.write_url();
    }

    /// Remove `q` from the URL and forget the page count
    pub fn clear_text(&mut self) {
        self.committed_text = None;
        self.total_pages = None;
        self.write_url();
    }

    /// Record the page count of a new result set
    ///
    /// Returns whether the current page had to be clamped.
    pub fn set_total_pages(&mut self, total_pages: u32) -> bool {
        self.total_pages = Some(total_pages);
        let page = self.clamp_page(self.state.page);
        if page == self.state.page {
            return false;
        }
        tracing::debug!("Clamping page {} to {}", self.state.page, page);
        self.state.page = page;
        self.write_url();
        true
    }

    /// Write the current state to the URL
    pub fn sync(&mut self) {
        self.write_url();
    }

    fn clamp_page(&self, page: u32) -> u32 {
        let upper = self.total_pages.map(|total| total.max(1)).unwrap_or(u32::MAX);
        page.clamp(1, upper)
    }

    fn write_url(&mut self) {
        self.state
            .write_params(&mut self.params, self.committed_text.as_deref());
        self.url.replace_query(&self.params.encode());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::search::url::MemoryUrl;

    fn manager(query: &str) -> QueryStateManager<MemoryUrl> {
        QueryStateManager::load(MemoryUrl::new(query), 10)
    }

    #[test]
    fn test_load_does_not_write() {
        let manager = manager("q=lamp&page=2");
        assert_eq!(manager.url().replacements(), 0);
        assert_eq!(manager.state().page, 2);
        assert_eq!(manager.state().text, "lamp");
    }

    #[test]
    fn test_every_setter_replaces_url() {
        let mut manager = manager("");
        manager.set_page(2);
        manager.set_page_size(20);
        manager.set_text("cha");
        assert_eq!(manager.url().replacements(), 3);
        assert_eq!(manager.url().query(), "page=2&per_page=20");
    }

    #[test]
    fn test_unchanged_values_do_not_write() {
        let mut manager = manager("page=3");
        assert!(!manager.set_page(3));
        assert!(!manager.set_page_size(0));
        assert_eq!(manager.url().replacements(), 0);
    }

    #[test]
    fn test_clamp_once_total_known() {
        let mut manager = manager("page=9");
        assert!(manager.set_page(50));
        assert_eq!(manager.state().page, 50);

        assert!(manager.set_total_pages(4));
        assert_eq!(manager.state().page, 4);

        manager.set_page(10);
        assert_eq!(manager.state().page, 4);

        manager.set_total_pages(0);
        assert_eq!(manager.state().page, 1);
    }

    #[test]
    fn test_commit_and_clear_text() {
        let mut manager = manager("sort=new");
        manager.set_text("lamp");
        manager.commit_text("lamp");
        assert_eq!(manager.url().query(), "sort=new&page=1&per_page=10&q=lamp");

        manager.clear_text();
        assert_eq!(manager.url().query(), "sort=new&page=1&per_page=10");
        assert_eq!(manager.total_pages(), None);
    }
}
