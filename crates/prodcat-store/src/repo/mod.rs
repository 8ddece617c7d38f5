//! Repository layer for persisting Products to SQLite
//!
//! Every operation takes the connection as an argument; there is no
//! process-wide session.

pub mod product_repo;

pub use product_repo::ProductRepo;
