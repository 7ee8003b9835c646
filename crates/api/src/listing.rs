//! Glue between list handlers and the paging envelope.

use axum::http::Uri;
use serde::Serialize;
use storefront_core::pagination::{Page, PageRequest};

use crate::error::AppResult;

/// Validate the requested page number against `page_size`.
pub fn page_request(page: Option<i64>, page_size: i64) -> AppResult<PageRequest> {
    Ok(PageRequest::new(page, page_size)?)
}

/// Wrap one page of rows in the `{count, next, previous, results}`
/// envelope, building neighbour links from the original request URI.
pub fn paginate<T: Serialize>(
    uri: &Uri,
    request: PageRequest,
    count: i64,
    results: Vec<T>,
) -> AppResult<Page<T>> {
    Ok(Page::new(request, count, results, uri.path(), uri.query())?)
}
