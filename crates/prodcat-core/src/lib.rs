//! Prodcat Core - Product catalog domain model
//!
//! This crate provides the entities and validation rules for the product
//! store, including:
//! - Product entity with validation, display, and record serialization
//! - Category closed enumeration with name-based round-trip
//! - DataValidationError, the single error kind crossing the API
//! - Logging initialization facility
//!
//! Persistence lives in `prodcat-store`; nothing here touches a database.

pub mod category;
pub mod errors;
pub mod logging;
pub mod product;

// Re-export commonly used types
pub use category::Category;
pub use errors::{DataValidationError, Result};
pub use product::{price_text, Product};
