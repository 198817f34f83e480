use serde::Serialize;

/// Default width of the visible page window in pager controls.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Pagination metadata for one page of results. All indices are 0-based;
/// [`page_href`] maps them to the 1-based path convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    /// Contiguous ascending indices shown in the pager; contains
    /// `current_page` whenever `total_pages > 0`.
    pub page_numbers: Vec<usize>,
    pub start_page: usize,
    pub end_page: usize,
}

impl PageWindow {
    /// Pager controls are pointless for a single page.
    pub fn is_renderable(&self) -> bool {
        self.total_pages > 1
    }
}

/// Computes the visible page window around `current_page`.
///
/// The window is anchored at `current_page - max_visible / 2` and clipped to
/// the valid range; when it hits the upper bound it is re-anchored backwards
/// so it keeps its full width whenever enough pages exist. Callers must clamp
/// `current_page` into `[0, total_pages - 1]` first (see
/// [`validate_page_number`]).
pub fn compute_window(current_page: usize, total_pages: usize, max_visible: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow {
            current_page,
            total_pages,
            has_previous: false,
            has_next: false,
            previous_page: None,
            next_page: None,
            page_numbers: Vec::new(),
            start_page: 0,
            end_page: 0,
        };
    }

    let max_visible = max_visible.max(1);
    let has_previous = current_page > 0;
    let has_next = current_page + 1 < total_pages;

    let mut start_page = current_page.saturating_sub(max_visible / 2);
    let end_page = (start_page + max_visible - 1).min(total_pages - 1);
    if end_page - start_page + 1 < max_visible {
        start_page = (end_page + 1).saturating_sub(max_visible);
    }

    PageWindow {
        current_page,
        total_pages,
        has_previous,
        has_next,
        previous_page: has_previous.then(|| current_page - 1),
        next_page: has_next.then(|| current_page + 1),
        page_numbers: (start_page..=end_page).collect(),
        start_page,
        end_page,
    }
}

/// Converts a 1-based external page parameter into a clamped 0-based index.
/// Non-numeric or out-of-range input falls back to the nearest valid page;
/// the first page when in doubt.
pub fn validate_page_number(raw: Option<&str>, total_pages: usize) -> usize {
    let parsed = raw.unwrap_or("1").trim().parse::<i64>().unwrap_or(1);
    let internal = parsed - 1;
    if internal < 0 {
        return 0;
    }
    let internal = internal as usize;
    if internal >= total_pages {
        total_pages.saturating_sub(1)
    } else {
        internal
    }
}

/// Maps a 0-based page index to its URL path: page 0 is the base path, page
/// N is `base/N+1`.
pub fn page_href(base: &str, page: usize) -> String {
    let base = base.trim_end_matches('/');
    if page == 0 {
        base.to_string()
    } else {
        format!("{}/{}", base, page + 1)
    }
}
