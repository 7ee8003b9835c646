//! Page-number pagination.
//!
//! Lists are paged with `?page=N` (1-based). The response envelope carries
//! the total row count plus links to the neighbouring pages, built from the
//! request path and query with only the `page` parameter rewritten.

use serde::Serialize;

use crate::error::CoreError;

/// Default page size for API lists.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page size for console change lists.
pub const CONSOLE_PAGE_SIZE: i64 = 10;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Build a request for `page` (default 1). Page numbers below 1, or so
    /// large that their row offset overflows, are rejected up front; other
    /// pages past the end are rejected by [`Page::new`].
    pub fn new(page: Option<i64>, page_size: i64) -> Result<Self, CoreError> {
        let page = page.unwrap_or(1);
        if page < 1 {
            return Err(invalid_page());
        }
        let page_size = page_size.max(1);
        if (page - 1).checked_mul(page_size).is_none() {
            return Err(invalid_page());
        }
        Ok(Self { page, page_size })
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Number of pages needed for `count` rows. An empty result still has
    /// one (empty) page.
    pub fn num_pages(&self, count: i64) -> i64 {
        if count <= 0 {
            1
        } else {
            (count + self.page_size - 1) / self.page_size
        }
    }
}

/// Paged response envelope: `{count, next, previous, results}`.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// Assemble a page. `path` and `raw_query` are the request's path and
    /// undecoded query string, used to build the neighbour links.
    pub fn new(
        request: PageRequest,
        count: i64,
        results: Vec<T>,
        path: &str,
        raw_query: Option<&str>,
    ) -> Result<Self, CoreError> {
        let num_pages = request.num_pages(count);
        if request.page > num_pages {
            return Err(invalid_page());
        }

        let next = (request.page < num_pages)
            .then(|| page_link(path, raw_query, Some(request.page + 1)));
        let previous = (request.page > 1).then(|| {
            let target = request.page - 1;
            page_link(path, raw_query, (target > 1).then_some(target))
        });

        Ok(Self {
            count,
            next,
            previous,
            results,
        })
    }
}

/// Rewrite the `page` parameter of `raw_query`. `None` removes it, which is
/// how the first page is addressed. Other parameters keep their original
/// (already encoded) text and order.
pub fn page_link(path: &str, raw_query: Option<&str>, page: Option<i64>) -> String {
    let mut pairs: Vec<String> = raw_query
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some("page"))
        .map(str::to_string)
        .collect();

    if let Some(page) = page {
        pairs.push(format!("page={page}"));
    }

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}

fn invalid_page() -> CoreError {
    CoreError::InvalidPage
}
