// web_app/search/state.rs - Search query state and its URL form
//
// The address bar is the only state that survives a reload, so the
// search page keeps `{text, page, page_size}` mirrored into it as
// `q`, `page` and `per_page`. This file holds the pure
// serialize/deserialize pair; writing happens in manager.rs.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const PARAM_TEXT: &str = "q";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "per_page";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum trimmed length (in characters) that enables search mode
pub const MIN_QUERY_LEN: usize = 3;

/// Whether `text` is long enough to search for
pub fn is_search_text(text: &str, min_len: usize) -> bool {
    text.trim().chars().count() >= min_len
}

/// Current search text, page and page size
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQueryState {
    pub text: String,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchQueryState {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQueryState {
    pub fn is_search_mode(&self, min_len: usize) -> bool {
        is_search_text(&self.text, min_len)
    }

    /// Seed state from URL parameters
    ///
    /// Missing, zero or unparseable numbers fall back to the defaults.
    pub fn from_params(params: &QueryParams, default_page_size: u32) -> Self {
        let positive = |key: &str| {
            params
                .get(key)
                .and_then(|value| value.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
        };

        Self {
            text: params.get(PARAM_TEXT).unwrap_or_default().to_string(),
            page: positive(PARAM_PAGE).unwrap_or(DEFAULT_PAGE),
            page_size: positive(PARAM_PER_PAGE).unwrap_or(default_page_size.max(1)),
        }
    }

    /// Write page and page size into `params`; `q` is only written when
    /// `text` is given (it is committed separately after a fetch)
    pub fn write_params(&self, params: &mut QueryParams, text: Option<&str>) {
        params.set(PARAM_PAGE, self.page.to_string());
        params.set(PARAM_PER_PAGE, self.page_size.to_string());
        match text {
            Some(text) => params.set(PARAM_TEXT, text),
            None => params.remove(PARAM_TEXT),
        }
    }
}

/// Ordered `application/x-www-form-urlencoded` pairs
///
/// Behaves like the browser's URLSearchParams: `set` replaces the first
/// occurrence in place and drops duplicates, foreign keys are preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a query string, with or without the leading `?`
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        Self(form_urlencoded::parse(input.as_bytes()).into_owned().collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encoded form, without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
