//! Page/per-page windowing for catalog listings.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Window selecting one page of an ordered listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// One page of results together with its position in the listing.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
