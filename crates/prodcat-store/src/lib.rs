//! Prodcat Store - SQLite persistence for the product catalog
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - Repository layer with CRUD and finder operations over Products
//! - Connection management; every operation takes the connection explicitly
//!
//! There is no process-wide session. Callers open a connection (or use
//! [`db::init`]) and pass it into each [`ProductRepo`] call.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::ProductRepo;
