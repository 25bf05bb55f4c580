//! Page window arithmetic and listing scopes.

use uuid::Uuid;

/// List views cut `description` to this many Unicode code points.
pub const DESCRIPTION_PREVIEW_CHARS: i32 = 200;

/// Upper bound on `limit` accepted from clients.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Which products a listing may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// Buyer view: the whole catalog, optionally narrowed by a name search.
    Catalog { search: Option<String> },
    /// Seller view: only products the seller owns.
    Seller(Uuid),
}

impl ListScope {
    /// Buyer scope. Blank search text means no search.
    pub fn catalog(search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        ListScope::Catalog { search }
    }
}

/// Offset window for a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl PageWindow {
    /// `skip = (page - 1) * limit`, saturating instead of overflowing.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            skip: page.saturating_sub(1).saturating_mul(limit),
            limit,
        }
    }
}

/// `ceil(count / limit)`; zero when there is nothing to show.
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_skips_nothing() {
        assert_eq!(PageWindow::new(1, 10), PageWindow { skip: 0, limit: 10 });
    }

    #[test]
    fn test_later_pages_skip_whole_pages() {
        assert_eq!(PageWindow::new(3, 10).skip, 20);
        assert_eq!(PageWindow::new(2, 7).skip, 7);
    }

    #[test]
    fn test_huge_page_saturates() {
        assert_eq!(PageWindow::new(u64::MAX, 100).skip, u64::MAX);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(101, 100), 2);
    }

    #[test]
    fn test_total_pages_zero_limit() {
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_catalog_scope_drops_blank_search() {
        assert_eq!(ListScope::catalog(None), ListScope::Catalog { search: None });
        assert_eq!(
            ListScope::catalog(Some("   ".into())),
            ListScope::Catalog { search: None }
        );
        assert_eq!(
            ListScope::catalog(Some(" lap ".into())),
            ListScope::Catalog {
                search: Some("lap".into())
            }
        );
    }
}
