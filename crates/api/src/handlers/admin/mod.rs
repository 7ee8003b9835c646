//! Operator console handlers under `/admin`.
//!
//! Every handler takes [`RequireAdmin`](crate::middleware::rbac::RequireAdmin),
//! so a missing token is a 401 and a non-admin token a 403. Change lists
//! page at [`CONSOLE_PAGE_SIZE`].

pub mod collections;
pub mod customers;
pub mod orders;
pub mod products;
pub mod subcollections;
pub mod users;

use storefront_core::pagination::CONSOLE_PAGE_SIZE;
use storefront_core::search::ListParams;
use storefront_db::repositories::ChangeListQuery;

use crate::error::AppResult;
use crate::listing::page_request;

/// Common `?search=&ordering=&page=` parameters as a change-list query.
fn change_list(params: &ListParams) -> AppResult<ChangeListQuery<'_>> {
    Ok(ChangeListQuery {
        search: params.search.as_deref(),
        ordering: params.ordering.as_deref(),
        page: page_request(params.page, CONSOLE_PAGE_SIZE)?,
    })
}
