use thiserror::Error;

/// Result type alias using DataValidationError
pub type Result<T> = std::result::Result<T, DataValidationError>;

/// The single error kind raised on invalid persistence preconditions
///
/// Every failure crossing the product store API is one of these variants:
/// entity validation, malformed finder input, record deserialization, and
/// backing-store failures surfaced unmodified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataValidationError {
    // ===== Entity Validation =====
    /// Product name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Operation requires a persisted Product but the id field is empty
    #[error("{op} called with an empty ID field")]
    MissingId { op: &'static str },

    /// Create called on a Product that already carries a store-assigned id
    #[error("Create called on a product already persisted with id [{id}]")]
    AlreadyPersisted { id: i64 },

    // ===== Finder Input =====
    /// Category name does not match any member of the closed set
    #[error("Unknown category name: {name}")]
    UnknownCategory { name: String },

    /// Price text cannot be parsed as a decimal
    #[error("Invalid price: {text}")]
    InvalidPrice { text: String },

    // ===== Record Deserialization =====
    /// Key-value record is missing a field or carries a wrong-typed value
    #[error("Invalid product: {reason}")]
    InvalidRecord { reason: String },

    // ===== Persistence =====
    /// Schema migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// Embedded migration SQL no longer matches the checksum recorded when it was applied
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    /// Backing store failure surfaced unmodified
    #[error("Storage failure: {message}")]
    Storage { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_message_names_the_operation() {
        let err = DataValidationError::MissingId { op: "Update" };
        assert_eq!(err.to_string(), "Update called with an empty ID field");

        let err = DataValidationError::MissingId { op: "Delete" };
        assert_eq!(err.to_string(), "Delete called with an empty ID field");
    }

    #[test]
    fn test_unknown_category_message_carries_the_name() {
        let err = DataValidationError::UnknownCategory {
            name: "GADGETS".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category name: GADGETS");
    }

    #[test]
    fn test_checksum_mismatch_message() {
        let err = DataValidationError::ChecksumMismatch {
            migration_id: "001_products".to_string(),
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch for migration 001_products: expected aa, got bb"
        );
    }
}
