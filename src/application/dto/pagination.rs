use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page/limit pagination envelope: the page's items, the unpaged total and
/// the page count derived from the limit (1 when listing is unpaged).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: Option<u32>) -> Self {
        let pages = match limit {
            Some(limit) if limit > 0 => total.div_ceil(u64::from(limit)).max(1) as u32,
            _ => 1,
        };
        Self {
            items,
            total,
            page,
            pages,
        }
    }
}

/// Offset for a 1-based page number; page 0 is treated as page 1.
pub fn page_offset(page: u32, limit: Option<u32>) -> u32 {
    match limit {
        Some(limit) => page.saturating_sub(1).saturating_mul(limit),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 7, 1, Some(3));
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn unpaged_listing_is_one_page() {
        let page = Page::new(vec![1, 2], 2, 1, None);
        assert_eq!(page.pages, 1);
        assert_eq!(page_offset(5, None), 0);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(page_offset(1, Some(10)), 0);
        assert_eq!(page_offset(3, Some(10)), 20);
        assert_eq!(page_offset(0, Some(10)), 0);
    }
}
