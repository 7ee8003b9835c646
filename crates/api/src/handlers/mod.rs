//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod cart_item;
pub mod collection;
pub mod product;
pub mod review;
