//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockroom-core errors (this file)                                  │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockroom-db errors (separate crate)                               │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  stockroom-service errors (separate crate)                          │
//! │  ├── AuthError        - Registration/login/session failures         │
//! │  └── InventoryError   - Facade-level CRUD failures                  │
//! │                                                                     │
//! │  Flow: ValidationError → InventoryError → caller (UI) re-prompts    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when raw user input doesn't meet requirements. They are
/// always recoverable locally: the caller re-prompts with the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A numeric field could not be parsed.
    ///
    /// ## When This Occurs
    /// The UI hands every entry field over as a string; price, quantity
    /// and threshold must parse before anything reaches storage.
    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// A numeric field parsed but is negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// A mutating operation was requested without a selected record.
    ///
    /// ## When This Occurs
    /// The caller invoked delete with no row selected in its table view.
    /// Made explicit here rather than being a silent caller-side precondition.
    #[error("no product selected")]
    NoSelection,
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotANumber {
            field: "price",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a number: 'abc'");

        let err = ValidationError::Negative { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must not be negative");

        assert_eq!(ValidationError::NoSelection.to_string(), "no product selected");
    }
}
