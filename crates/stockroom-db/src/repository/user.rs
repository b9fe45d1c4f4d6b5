//! # User Repository (Credential Store)
//!
//! Persists usernames with salted password hashes and verifies credentials.
//!
//! ## Password Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Credential Flow                                  │
//! │                                                                     │
//! │  register("alice", "s3cret")                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  argon2 hash with per-call random salt  →  PHC string               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  INSERT INTO users ... (UNIQUE constraint catches duplicates -      │
//! │  no pre-check, so two racing registrations cannot both win)         │
//! │                                                                     │
//! │  verify("alice", "guess")                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SELECT hash by username → absent? Ok(None), never an error         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Argon2::verify_password (constant-time comparison semantics)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plaintext passwords never reach storage and never appear in logs.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use stockroom_core::UserId;

/// A user row as stored in the credential store.
///
/// Carries the password hash, so this type stays inside the db layer;
/// services hand out `Session` values, never `UserRecord`s.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique identifier (integer, store-assigned).
    pub id: UserId,

    /// Unique username; equality is case-sensitive.
    pub username: String,

    /// Argon2 PHC-format hash. Never the plaintext, never derivable back.
    pub password_hash: String,
}

/// Repository for credential storage and verification.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Creates a new user with a freshly salted argon2 hash.
    ///
    /// ## Returns
    /// * `Ok(UserId)` - Row inserted, id from `last_insert_rowid`
    /// * `Err(DbError::UniqueViolation)` - Username already exists
    ///   (detected by the constraint, not a pre-check, to avoid races)
    pub async fn create(&self, username: &str, password: &str) -> DbResult<UserId> {
        debug!(username = %username, "Creating user");

        let password_hash = hash_password(password)?;

        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?1, ?2)")
            .bind(username)
            .bind(&password_hash)
            .execute(&self.pool)
            .await?;

        let id = UserId::new(result.last_insert_rowid());
        debug!(%id, username = %username, "User created");

        Ok(id)
    }

    /// Looks up a user by username.
    pub async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password_hash FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// ## Returns
    /// * `Ok(Some(UserRecord))` - Credentials match
    /// * `Ok(None)` - Unknown user OR wrong password; the two cases are
    ///   deliberately indistinguishable here so callers cannot leak which
    ///   usernames exist
    ///
    /// A missing user is simply "not authenticated", never an error.
    pub async fn verify(&self, username: &str, password: &str) -> DbResult<Option<UserRecord>> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(None);
        };

        if verify_password(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Deletes a user by username.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No such username
    pub async fn delete(&self, username: &str) -> DbResult<()> {
        debug!(username = %username, "Deleting user");

        let result = sqlx::query("DELETE FROM users WHERE username = ?1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", username));
        }

        Ok(())
    }

    /// Inserts a user only if the username is absent.
    ///
    /// Used by bootstrap. A unique violation from a racing inserter is
    /// treated as "already present", so this is idempotent by construction.
    ///
    /// ## Returns
    /// `true` when this call created the row.
    pub async fn ensure(&self, username: &str, password: &str) -> DbResult<bool> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        match self.create(username, password).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Counts user rows (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Hashing Helpers
// =============================================================================

/// Hashes a password for storage.
///
/// Argon2 with default cost parameters (slow, adaptive) and a per-call
/// random salt; the output is a self-describing PHC string, so the cost
/// can be raised later without invalidating existing rows.
pub fn hash_password(password: &str) -> DbResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// An unparseable stored hash verifies as false rather than erroring;
/// the caller sees the same "not authenticated" as any wrong password.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => {
            warn!("Stored password hash is unparseable");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
