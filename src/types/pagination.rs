use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 25;
pub const ITEMS_PER_PAGE_OPTIONS: [u32; 9] = [10, 25, 50, 100, 200, 500, 1000, 2000, 5000];

/// Raw paging parameters as they arrive on a query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub total: Option<u64>,
}

impl Pagination {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self, default: u32) -> u32 {
        self.per_page.unwrap_or(default)
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}

/// Where a paged list currently stands.
///
/// `current_page` always lies in `1..=max(total_pages, 1)`; both constructors
/// uphold that, one by rejecting and one by clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
    pub total_items: u64,
}

impl PaginationState {
    pub fn try_new(
        current_page: u32,
        items_per_page: u32,
        total_items: u64,
    ) -> Result<Self, PaginationError> {
        let total_pages = total_pages(total_items, items_per_page)?;
        if current_page < 1 || current_page > total_pages.max(1) {
            return Err(PaginationError::InvalidRange {
                page: current_page,
                total_pages,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
            items_per_page,
            total_items,
        })
    }

    pub fn clamped(
        current_page: u32,
        items_per_page: u32,
        total_items: u64,
    ) -> Result<Self, PaginationError> {
        let total_pages = total_pages(total_items, items_per_page)?;
        Ok(Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
            items_per_page,
            total_items,
        })
    }

    /// 1-based index of the first item shown, or 0 for an empty list.
    pub fn start_item(&self) -> u64 {
        if self.total_items == 0 {
            return 0;
        }
        self.offset() + 1
    }

    pub fn end_item(&self) -> u64 {
        (self.current_page as u64 * self.items_per_page as u64).min(self.total_items)
    }

    pub fn offset(&self) -> u64 {
        (self.current_page as u64 - 1) * self.items_per_page as u64
    }

    pub fn limit(&self) -> u32 {
        self.items_per_page
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page buttons only make sense once there is somewhere to go.
    pub fn shows_page_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_control_visible(&self, show_items_per_page: bool) -> bool {
        self.shows_page_controls() || show_items_per_page
    }
}

fn total_pages(total_items: u64, items_per_page: u32) -> Result<u32, PaginationError> {
    if items_per_page == 0 {
        return Err(PaginationError::ZeroItemsPerPage);
    }
    let pages = total_items.div_ceil(items_per_page as u64);
    Ok(u32::try_from(pages).unwrap_or(u32::MAX))
}
