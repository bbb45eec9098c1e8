use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::filter::FilterPayload;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Sort direction. The wire format is the case-sensitive `ASC`/`DESC` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Normalized list-request options, built once per request at the HTTP
/// boundary and consumed read-only by exactly one service call.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub filters: FilterPayload,
}

impl PageQuery {
    /// Build a query from raw optional inputs, applying the documented
    /// defaults. Invalid values never fail the request: `page` is floored at 1
    /// and `limit` clamped to `1..=MAX_LIMIT`.
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        sort_by: Option<String>,
        sort_order: Option<SortOrder>,
        filters: FilterPayload,
    ) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            sort_by: sort_by.unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
            sort_order: sort_order.unwrap_or_default(),
            filters,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

// Derived Default would produce page=0/limit=0, violating the invariants
// `new` establishes.
impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None, None, None, FilterPayload::new())
    }
}

/// `ceil(total / limit)`, with zero pages for an empty result set.
pub fn page_count(total: u64, limit: u64) -> u64 {
    if total == 0 { 0 } else { total.div_ceil(limit) }
}

/// Pagination metadata echoed back with every list response. `sort_by` and
/// `sort_order` are the values actually used after default and allow-list
/// resolution, so clients can detect when their request was adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

/// The uniform result envelope every list endpoint converges on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, query: &PageQuery, sort_by: &str) -> Self {
        Self {
            items,
            meta: PageMeta {
                total,
                page: query.page,
                limit: query.limit,
                pages: page_count(total, query.limit),
                sort_by: sort_by.to_string(),
                sort_order: query.sort_order,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(41, 20), 3);
    }

    #[test]
    fn defaults_apply_when_inputs_missing() {
        let query = PageQuery::new(None, None, None, None, FilterPayload::new());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort_by, "created_at");
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn out_of_range_inputs_are_normalized() {
        let query = PageQuery::new(Some(0), Some(10_000), None, None, FilterPayload::new());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, MAX_LIMIT);
    }

    #[test]
    fn offset_is_zero_indexed_from_page() {
        let query = PageQuery::new(Some(3), Some(5), None, None, FilterPayload::new());
        assert_eq!(query.offset(), 10);
    }

    #[test]
    fn sort_order_parse_is_case_sensitive() {
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("asc".parse::<SortOrder>().is_err());
    }

    #[test]
    fn default_query_satisfies_invariants() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset(), 0);

        let page: Page<u32> = Page::new(vec![1, 2, 3], 3, &query, "created_at");
        assert_eq!(page.meta.pages, 1);
    }

    #[test]
    fn page_past_the_end_yields_empty_items_with_accurate_meta() {
        let query = PageQuery::new(Some(99), Some(20), None, None, FilterPayload::new());
        assert_eq!(query.offset(), 1960);

        let page: Page<u32> = Page::new(Vec::new(), 41, &query, "created_at");
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 41);
        assert_eq!(page.meta.pages, 3);
        assert_eq!(page.meta.page, 99);
    }

    #[test]
    fn meta_echoes_resolved_sort() {
        let query = PageQuery::new(
            Some(2),
            Some(5),
            Some("nonsense".to_string()),
            Some(SortOrder::Asc),
            FilterPayload::new(),
        );
        let page: Page<u32> = Page::new(vec![6, 7, 8, 9, 10], 12, &query, "created_at");
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.limit, 5);
        assert_eq!(page.meta.pages, 3);
        assert_eq!(page.meta.sort_by, "created_at");
        assert_eq!(page.meta.sort_order, SortOrder::Asc);
    }
}
