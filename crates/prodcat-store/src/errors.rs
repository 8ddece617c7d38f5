//! Error handling for prodcat-store
//!
//! Maps store-level failures into the core DataValidationError

use prodcat_core::errors::DataValidationError;

pub use prodcat_core::errors::Result;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> DataValidationError {
    DataValidationError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> DataValidationError {
    DataValidationError::ChecksumMismatch {
        migration_id: migration_id.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> DataValidationError {
    DataValidationError::Storage {
        message: err.to_string(),
    }
}
