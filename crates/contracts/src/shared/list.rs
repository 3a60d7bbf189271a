//! Server-side paging for list views.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Body of every paginated endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub rows: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            total: 0,
            rows: Vec::new(),
        }
    }
}

/// Query string sent with a list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: usize,
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// What the list view owns: page (0-based), size and filter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub page_size: usize,
    pub filter: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            filter: String::new(),
        }
    }
}

impl ListParams {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// New size; the current page may no longer exist.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// New filter text; restarts from the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            self.filter = filter;
            self.page = 0;
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn to_query(&self) -> ListQuery {
        let search = self.filter.trim();
        ListQuery {
            limit: self.page_size,
            offset: self.offset(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Issues a ticket per request; only the newest ticket may apply its result.
///
/// Pairs with request abortion: a response that still lands after its
/// request was superseded is dropped here.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequencer {
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidates every outstanding ticket (unmount).
    pub fn cancel_all(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_zero_based_page() {
        let mut params = ListParams::default();
        assert_eq!(params.offset(), 0);
        params.set_page(2);
        assert_eq!(params.offset(), 10);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut params = ListParams::default();
        params.set_page(3);
        params.set_filter("lapiz");
        assert_eq!(params.page, 0);

        params.set_page(1);
        params.set_filter("lapiz");
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_query_string_omits_empty_search() {
        let params = ListParams::default();
        let query = params.to_query();
        assert_eq!(query.search, None);
        assert_eq!(
            serde_json::to_value(&query).expect("serialize"),
            serde_json::json!({"limit": 5, "offset": 0})
        );

        let mut params = ListParams::default();
        params.set_filter("  cuaderno ");
        let query = params.to_query();
        assert_eq!(query.search.as_deref(), Some("cuaderno"));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(6, 0), 0);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut seq = FetchSequencer::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        seq.cancel_all();
        assert!(!seq.is_current(second));
    }

    #[test]
    fn test_list_response_shape() {
        let body = r#"{"total": 7, "rows": [{"id": 1}, {"id": 2}]}"#;
        let parsed: ListResponse<serde_json::Value> =
            serde_json::from_str(body).expect("parse");
        assert_eq!(parsed.total, 7);
        assert_eq!(parsed.rows.len(), 2);
    }
}
