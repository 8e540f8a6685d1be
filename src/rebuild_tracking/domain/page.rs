use serde::{Deserialize, Serialize};

/// Per-page size the backend falls back to when it receives zero or less.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// One page of a backend collection.
///
/// `page_no` is 1-based. `count` is the size of the whole collection, not of
/// this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page_no: u32,
    #[serde(default)]
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, count: u64, page_no: u32, per_page: u32) -> Self {
        Self {
            items,
            count,
            page_no,
            per_page,
        }
    }

    /// Number of pages needed to show `count` rows at `per_page` rows each.
    pub fn page_count(count: u64, per_page: u32) -> u64 {
        let per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        count.div_ceil(u64::from(per_page)).max(1)
    }
}

/// Page coordinates of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_page() {
        let json = r#"{"items":["quay.io/a","quay.io/b"],"count":42,"pageNo":3,"perPage":2}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.count, 42);
        assert_eq!(page.page_no, 3);
        assert_eq!(page.per_page, 2);
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let page: Page<String> = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(Page::<()>::page_count(0, 20), 1);
        assert_eq!(Page::<()>::page_count(20, 20), 1);
        assert_eq!(Page::<()>::page_count(21, 20), 2);
        assert_eq!(Page::<()>::page_count(41, 0), 3);
    }
}
