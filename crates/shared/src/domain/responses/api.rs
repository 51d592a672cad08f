use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiResponse {{ data: {:?} }}", self.data)
    }
}

/// `page` echoes the requested offset, matching the wire contract of the
/// listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    pub total_items: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Ceiling division so a trailing partial page is counted.
    pub fn new(total_items: i64, offset: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total_items + limit - 1) / limit
        } else {
            0
        };

        Self {
            total_items,
            page: offset,
            limit,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponsePagination<T> {
    pub data: T,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_trailing_partial_page() {
        assert_eq!(Pagination::new(25, 0, 10).total_pages, 3);
        assert_eq!(Pagination::new(20, 0, 10).total_pages, 2);
        assert_eq!(Pagination::new(1, 0, 10).total_pages, 1);
        assert_eq!(Pagination::new(0, 0, 10).total_pages, 0);
    }

    #[test]
    fn zero_limit_yields_zero_pages() {
        assert_eq!(Pagination::new(25, 0, 0).total_pages, 0);
    }

    #[test]
    fn page_echoes_offset() {
        assert_eq!(Pagination::new(25, 20, 10).page, 20);
    }
}
