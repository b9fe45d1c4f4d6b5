//! Service-level error types.
//!
//! Two enums, one per service surface. Both keep the recoverable cases
//! (validation, duplicates) distinct from storage failures, which are
//! propagated unwrapped and never retried.

use thiserror::Error;

use stockroom_core::{ProductId, ValidationError};
use stockroom_db::DbError;

/// Errors from registration, login and session management.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Empty or malformed username/password on registration.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The username is already taken.
    #[error("username '{username}' already exists")]
    DuplicateUsername { username: String },

    /// Login failed. Deliberately generic: unknown user and wrong
    /// password produce this same value, so callers cannot enumerate
    /// usernames through error shapes.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The presented session token is absent, revoked or expired.
    #[error("not authenticated")]
    Unauthorized,

    /// Account deletion targeted a user row that no longer exists.
    #[error("user '{username}' not found")]
    UnknownUser { username: String },

    /// Storage-layer failure, fatal for this operation.
    #[error("storage error: {0}")]
    Storage(DbError),
}

impl AuthError {
    /// Maps a credential-store error from a registration insert.
    ///
    /// A unique violation means the username was taken; everything else
    /// is a storage failure.
    pub(crate) fn from_register(err: DbError, username: &str) -> Self {
        if err.is_unique_violation() {
            AuthError::DuplicateUsername {
                username: username.to_string(),
            }
        } else {
            AuthError::Storage(err)
        }
    }
}

/// Errors from the inventory facade.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Raw field input failed to parse or validate; nothing reached
    /// storage. The message is suitable for re-prompting verbatim.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A product with this name already exists.
    #[error("product '{name}' already exists")]
    DuplicateName { name: String },

    /// No product row matched the given id.
    #[error("product not found: {id}")]
    NotFound { id: ProductId },

    /// The presented session token is absent, revoked or expired.
    #[error("not authenticated")]
    Unauthorized,

    /// Storage-layer failure, fatal for this operation.
    #[error("storage error: {0}")]
    Storage(DbError),
}

impl InventoryError {
    /// Maps a repository error from a mutating product statement,
    /// supplying the context the db layer doesn't have.
    pub(crate) fn from_mutation(err: DbError, id: ProductId, name: &str) -> Self {
        match err {
            DbError::UniqueViolation { .. } => InventoryError::DuplicateName {
                name: name.to_string(),
            },
            DbError::NotFound { .. } => InventoryError::NotFound { id },
            other => InventoryError::Storage(other),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_generic() {
        // The message must not mention usernames or passwords separately
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
    }

    #[test]
    fn test_register_error_mapping() {
        let dup = DbError::UniqueViolation {
            field: "users.username".to_string(),
        };
        assert!(matches!(
            AuthError::from_register(dup, "alice"),
            AuthError::DuplicateUsername { .. }
        ));

        let other = DbError::PoolExhausted;
        assert!(matches!(
            AuthError::from_register(other, "alice"),
            AuthError::Storage(_)
        ));
    }

    #[test]
    fn test_mutation_error_mapping() {
        let id = ProductId::new(7);

        let dup = DbError::UniqueViolation {
            field: "products.name".to_string(),
        };
        assert!(matches!(
            InventoryError::from_mutation(dup, id, "Widget"),
            InventoryError::DuplicateName { .. }
        ));

        let missing = DbError::not_found("product", 7);
        assert!(matches!(
            InventoryError::from_mutation(missing, id, "Widget"),
            InventoryError::NotFound { .. }
        ));
    }
}
