//! Repository layer - Data access used by seeds and the admin bootstrap
//!
//! Repositories borrow any `ConnectionTrait` so the same code runs on a
//! pooled connection, inside a transaction, or through a schema manager.

pub(crate) mod entities;
mod contact_repository;
mod user_repository;

pub use contact_repository::ContactStore;
pub use user_repository::UserStore;
