pub mod paging;
pub mod score;
pub mod sort;

pub use paging::{compute_window, page_href, validate_page_number, PageWindow};
pub use score::{annotate_comment, extract_domain, quality_score, relative_age, score_story};
pub use sort::{sort_by_field, sort_by_quality, SortField, SortOrder};
