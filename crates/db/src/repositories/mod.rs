//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cart_item_repo;
pub mod cart_repo;
pub mod collection_repo;
pub mod console_repo;
pub mod customer_repo;
pub mod order_repo;
pub mod product_repo;
pub mod review_repo;
pub mod role_repo;
pub mod subcollection_repo;
pub mod user_repo;

mod sql;

pub use cart_item_repo::CartItemRepo;
pub use cart_repo::CartRepo;
pub use collection_repo::CollectionRepo;
pub use console_repo::{ChangeListQuery, ConsoleRepo};
pub use customer_repo::CustomerRepo;
pub use order_repo::OrderRepo;
pub use product_repo::{ProductListQuery, ProductRepo};
pub use review_repo::ReviewRepo;
pub use role_repo::RoleRepo;
pub use subcollection_repo::SubCollectionRepo;
pub use user_repo::UserRepo;
