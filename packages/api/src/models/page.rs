//! List snapshots and their pagination metadata.
//!
//! List endpoints answer either `{"data": [...], "pagination": {...}}` or a
//! bare JSON array. A bare array, or an envelope without pagination, is treated
//! as a single page holding every row.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination metadata of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "one", alias = "page")]
    pub current_page: u32,
    #[serde(default = "one", alias = "pages")]
    pub total_pages: u32,
    #[serde(default, alias = "total")]
    pub total_count: u64,
    #[serde(default, alias = "limit")]
    pub page_size: u32,
}

fn one() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single(0)
    }
}

impl Pagination {
    /// Metadata for an unpaginated list of `count` rows.
    pub fn single(count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: count as u64,
            page_size: count as u32,
        }
    }

    /// Highest requestable page. An empty result still has page 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.last_page()).contains(&page)
    }
}

/// One page of rows plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        let pagination = Pagination::single(items.len());
        Self { items, pagination }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Paged {
        #[serde(alias = "items", alias = "results")]
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ListBody::<T>::deserialize(deserializer)? {
            ListBody::Paged {
                data,
                pagination: Some(pagination),
            } => Page {
                items: data,
                pagination,
            },
            ListBody::Paged {
                data,
                pagination: None,
            } => Page::single(data),
            ListBody::Bare(data) => Page::single(data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"data": [1, 2], "pagination": {"currentPage": 2, "totalPages": 5, "totalCount": 42, "pageSize": 10}}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_pages, 5);
        assert_eq!(page.pagination.total_count, 42);
    }

    #[test]
    fn test_bare_array_is_single_page() {
        let page: Page<u32> = serde_json::from_str("[4, 5, 6]").unwrap();
        assert_eq!(page.pagination, Pagination::single(3));
    }

    #[test]
    fn test_envelope_without_pagination() {
        let page: Page<u32> = serde_json::from_str(r#"{"items": [9]}"#).unwrap();
        assert_eq!(page.items, vec![9]);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_bounds() {
        let empty = Pagination {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            page_size: 10,
        };
        assert_eq!(empty.last_page(), 1);
        assert!(empty.contains(1));
        assert!(!empty.contains(0));
        assert!(!empty.contains(2));
    }
}
