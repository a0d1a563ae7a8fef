// src/shared/api/pagination.rs
use serde::{Deserialize, Serialize};

/// Hard ceiling on page size, shared by every listing endpoint.
pub const MAX_PAGE_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Build a request from raw query values.
    ///
    /// `0` means "not supplied" (serde default). Out-of-range values are
    /// clamped rather than rejected: page below 1 becomes 1, limit below 1
    /// becomes `default_limit`, limit above the ceiling becomes the ceiling.
    pub fn clamped(page: u32, limit: u32, default_limit: u32) -> Self {
        let page = if page == 0 { 1 } else { page };
        let limit = if limit == 0 { default_limit } else { limit };

        Self {
            page,
            limit: limit.min(MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * (self.limit as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 12 }
    }
}

/// One page of items plus the inputs needed to derive pagination metadata.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit, self.total)
    }
}

/// Wire shape: `{ page, limit, total, totalPages, hasNext, hasPrev }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit64 = limit.max(1) as u64;
        let total_pages = total.div_ceil(limit64);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: (page as u64) * limit64 < total,
            has_prev: page > 1,
        }
    }
}
