// web_app/search/url.rs - Query string storage
//
// The manager only needs two operations: read the current query string
// and replace it. Replacing must never add a history entry, otherwise
// every keystroke would pollute back/forward navigation.

/// Holder of the page's query string
pub trait UrlStore {
    /// Current query string, without the leading `?`
    fn query(&self) -> String;

    /// Replace the query string in place
    fn replace_query(&mut self, query: &str);
}

/// In-memory store, used during SSR, by the CLI probe and in tests
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryUrl {
    query: String,
    replacements: usize,
}

impl MemoryUrl {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim_start_matches('?').to_string(),
            replacements: 0,
        }
    }

    /// Number of replace operations so far
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl UrlStore for MemoryUrl {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.replacements += 1;
    }
}

/// The browser address bar (`location.search` / `history.replaceState`)
///
/// Outside a hydrated page there is no window; the store then behaves
/// like an empty, write-only URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserUrl;

impl UrlStore for BrowserUrl {
    fn query(&self) -> String {
        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                web_sys::window()
                    .and_then(|window| window.location().search().ok())
                    .map(|search| search.trim_start_matches('?').to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        }
    }

    fn replace_query(&mut self, query: &str) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let path = window.location().pathname().unwrap_or_default();
                let target = if query.is_empty() {
                    path
                } else {
                    format!("{path}?{query}")
                };
                let replaced = window.history().and_then(|history| {
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target))
                });
                if let Err(err) = replaced {
                    tracing::warn!("replaceState failed: {:?}", err);
                }
            } else {
                tracing::trace!("No browser history, dropping query {}", query);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_url_strips_question_mark() {
        let url = MemoryUrl::new("?page=2");
        assert_eq!(url.query(), "page=2");
    }

    #[test]
    fn test_memory_url_counts_replacements() {
        let mut url = MemoryUrl::default();
        url.replace_query("page=1");
        url.replace_query("page=2");
        assert_eq!(url.query(), "page=2");
        assert_eq!(url.replacements(), 2);
    }
}
