//! Storefront domain primitives.
//!
//! Everything in this crate is pure: no database access, no HTTP. The
//! repository and API layers build on these types so filtering, ordering,
//! paging and the console's computed columns behave the same everywhere.

pub mod catalog;
pub mod console;
pub mod error;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod types;
