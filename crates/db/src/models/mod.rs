//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (also used for full replacement)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod cart;
pub mod collection;
pub mod console;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;
pub mod role;
pub mod subcollection;
pub mod user;
