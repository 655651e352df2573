// web_app/search/pagination.rs - Pagination window builder
//
// Given the current page and the page count, decide which page buttons
// and ellipsis markers to render. Pure; the caller keeps `current_page`
// inside `[1, total_pages]`.

use serde::{Deserialize, Serialize};

/// Number of consecutive page buttons around the current page
pub const DEFAULT_WINDOW: u32 = 5;

/// Which side of the window an ellipsis sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Leading,
    Trailing,
}

/// One rendered pagination control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageControl {
    Page { number: u32, active: bool },
    Ellipsis(Edge),
}

impl PageControl {
    fn page(number: u32, current: u32) -> Self {
        PageControl::Page {
            number,
            active: number == current,
        }
    }

    /// Stable key for keyed rendering
    pub fn key(&self) -> String {
        match self {
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis(Edge::Leading) => "left-ellipsis".to_string(),
            PageControl::Ellipsis(Edge::Trailing) => "right-ellipsis".to_string(),
        }
    }
}

/// Build the controls for `current_page` out of `total_pages`
///
/// The window starts `window_size / 2` pages before the current page and
/// is not shifted back near the end, so the last pages show fewer
/// buttons. Page 1 and the last page are always reachable.
pub fn build_page_window(current_page: u32, total_pages: u32, window_size: u32) -> Vec<PageControl> {
    let window_size = window_size.max(1);
    let mut controls = Vec::with_capacity(window_size as usize + 4);
    if total_pages == 0 {
        return controls;
    }

    let start = current_page.saturating_sub(window_size / 2).max(1);
    let end = total_pages.min(start.saturating_add(window_size - 1));

    if start > 1 {
        controls.push(PageControl::page(1, current_page));
    }
    if start > 2 {
        controls.push(PageControl::Ellipsis(Edge::Leading));
    }

    controls.extend((start..=end).map(|number| PageControl::page(number, current_page)));

    if end < total_pages {
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis(Edge::Trailing));
        }
        controls.push(PageControl::page(total_pages, current_page));
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(controls: &[PageControl]) -> String {
        controls
            .iter()
            .map(|control| match control {
                PageControl::Page { number, active: true } => format!("[{}]", number),
                PageControl::Page { number, .. } => number.to_string(),
                PageControl::Ellipsis(_) => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_no_pages() {
        assert!(build_page_window(1, 0, DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn test_second_page_has_no_leading_ellipsis() {
        // start = max(1, 3 - 2) = 1
        assert_eq!(render(&build_page_window(3, 10, 5)), "1 2 [3] 4 5 … 10");
        // start = 2: page 1 button but no gap marker
        assert_eq!(render(&build_page_window(4, 10, 5)), "1 2 3 [4] 5 6 … 10");
    }

    #[test]
    fn test_no_trailing_ellipsis_when_adjacent() {
        assert_eq!(render(&build_page_window(5, 8, 5)), "1 … 3 4 [5] 6 7 8");
    }

    #[test]
    fn test_last_page_window_is_not_shifted() {
        assert_eq!(render(&build_page_window(20, 20, 5)), "1 … 18 19 [20]");
    }

    #[test]
    fn test_zero_window_is_treated_as_one() {
        assert_eq!(render(&build_page_window(3, 5, 0)), "1 … [3] … 5");
    }

    #[test]
    fn test_keys_are_unique() {
        let controls = build_page_window(10, 20, 5);
        let mut keys: Vec<_> = controls.iter().map(PageControl::key).collect();
        let len = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), len);
    }
}
