//! Pagination utilities for service layer
//!
//! Page numbers are 1-based. Missing, zero or negative inputs fall back to the defaults
//! before the offset is computed.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self { Self { page, limit } }

    /// Substitute defaults for non-positive values.
    pub fn normalized(self) -> Self {
        let page = if self.page <= 0 { DEFAULT_PAGE } else { self.page };
        let limit = if self.limit <= 0 { DEFAULT_LIMIT } else { self.limit };
        Self { page, limit }
    }

    /// `(offset, limit)` with `offset = (page - 1) * limit`, capped at `i64::MAX` since SQL
    /// offsets are signed 64-bit.
    pub fn offset_limit(self) -> (u64, u64) {
        let Self { page, limit } = self.normalized();
        let page_idx = (page - 1) as u64;
        let limit = limit as u64;
        let offset = page_idx.saturating_mul(limit).min(i64::MAX as u64);
        (offset, limit)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn non_positive_inputs_fall_back_to_defaults() {
        for (page, limit) in [(0, 0), (-3, -1), (0, -7)] {
            assert_eq!(Pagination::new(page, limit).normalized(), Pagination::default());
            assert_eq!(Pagination::new(page, limit).offset_limit(), (0, 5));
        }
    }

    #[test]
    fn offset_is_page_index_times_limit() {
        assert_eq!(Pagination::new(1, 5).offset_limit(), (0, 5));
        assert_eq!(Pagination::new(2, 5).offset_limit(), (5, 5));
        assert_eq!(Pagination::new(3, 10).offset_limit(), (20, 10));
        assert_eq!(Pagination::new(4, 0).offset_limit(), (15, 5));
    }

    #[test]
    fn huge_page_is_capped_instead_of_overflowing() {
        let (offset, limit) = Pagination::new(i64::MAX, i64::MAX).offset_limit();
        assert_eq!(offset, i64::MAX as u64);
        assert_eq!(limit, i64::MAX as u64);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.limit, 5);
    }
}
