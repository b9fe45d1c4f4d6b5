//! # Auth Service
//!
//! Registration, login, logout and account deletion against the
//! credential store.
//!
//! ## Login Error Shape
//! ```text
//! login("alice", "wrong")   → Err(InvalidCredentials)
//! login("nobody", "guess")  → Err(InvalidCredentials)
//! ```
//! The two failures are indistinguishable by construction: the credential
//! store already collapses "unknown user" and "wrong password" into one
//! `None`, and this service never inspects which it was.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AuthError;
use crate::session::{Session, SessionManager, SessionToken};
use stockroom_core::validation::{validate_password, validate_username};
use stockroom_core::UserId;
use stockroom_db::{Database, DbError, UserRepository};

/// Authentication and session service.
pub struct AuthService {
    users: UserRepository,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    /// Creates a new auth service over the shared database handle.
    ///
    /// The `SessionManager` is shared with the inventory facade so that
    /// sessions issued here gate CRUD there.
    pub fn new(db: &Database, sessions: Arc<SessionManager>) -> Self {
        AuthService {
            users: db.users(),
            sessions,
        }
    }

    /// Registers a new user.
    ///
    /// ## Errors
    /// * `InvalidInput` - empty username or password
    /// * `DuplicateUsername` - the name is taken (surfaced unchanged from
    ///   the store's uniqueness constraint)
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, AuthError> {
        let username = validate_username(username)?;
        validate_password(password)?;

        let id = self
            .users
            .create(&username, password)
            .await
            .map_err(|e| AuthError::from_register(e, &username))?;

        info!(username = %username, "User registered");
        Ok(id)
    }

    /// Authenticates a user and issues a session.
    ///
    /// On success the caller holds an opaque token accepted by the
    /// inventory facade. On failure the error is always
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .users
            .verify(username, password)
            .await
            .map_err(AuthError::Storage)?;

        let Some(user) = user else {
            // Same log shape for both causes; the username is already in
            // the caller's hands, logging it adds no enumeration risk
            warn!(username = %username, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = self.sessions.issue(user.id, &user.username);
        info!(username = %user.username, "Login successful");
        Ok(session)
    }

    /// Ends a session (Authenticated → Unauthenticated).
    ///
    /// ## Errors
    /// * `Unauthorized` - the token was never issued, already revoked,
    ///   or has expired
    pub async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        if self.sessions.revoke(token) {
            info!("Logout");
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }

    /// Deletes the authenticated user's account.
    ///
    /// Removes the user row and revokes every session that user holds;
    /// the spare tokens must not outlive the account.
    pub async fn delete_account(&self, token: &SessionToken) -> Result<(), AuthError> {
        let session = self
            .sessions
            .resolve(token)
            .ok_or(AuthError::Unauthorized)?;

        self.users
            .delete(&session.username)
            .await
            .map_err(|e| match e {
                DbError::NotFound { .. } => AuthError::UnknownUser {
                    username: session.username.clone(),
                },
                other => AuthError::Storage(other),
            })?;

        let revoked = self.sessions.revoke_user(session.user_id);
        info!(
            username = %session.username,
            sessions_revoked = revoked,
            "Account deleted"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_db::DbConfig;

    async fn service() -> AuthService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AuthService::new(&db, Arc::new(SessionManager::new()))
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = service().await;

        auth.register("alice", "correct").await.unwrap();
        let session = auth.login("alice", "correct").await.unwrap();
        assert_eq!(session.username, "alice");
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let auth = service().await;

        assert!(matches!(
            auth.register("", "pw").await,
            Err(AuthError::InvalidInput(_))
        ));
        assert!(matches!(
            auth.register("alice", "").await,
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_one_row() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let auth = AuthService::new(&db, Arc::new(SessionManager::new()));

        auth.register("alice", "first").await.unwrap();
        let err = auth.register("alice", "second").await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername { .. }));

        assert_eq!(db.users().count().await.unwrap(), 1);
        // The original password still works
        assert!(auth.login("alice", "first").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let auth = service().await;
        auth.register("alice", "correct").await.unwrap();

        let wrong = auth.login("alice", "wrong").await.unwrap_err();
        let unknown = auth.login("bob", "anything").await.unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn test_logout_revokes_session() {
        let sessions = Arc::new(SessionManager::new());
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let auth = AuthService::new(&db, Arc::clone(&sessions));

        auth.register("alice", "pw").await.unwrap();
        let session = auth.login("alice", "pw").await.unwrap();

        auth.logout(&session.token).await.unwrap();
        assert!(sessions.resolve(&session.token).is_none());

        // Logging out twice is Unauthorized
        assert!(matches!(
            auth.logout(&session.token).await,
            Err(AuthError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_delete_account_removes_user_and_sessions() {
        let sessions = Arc::new(SessionManager::new());
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let auth = AuthService::new(&db, Arc::clone(&sessions));

        auth.register("alice", "pw").await.unwrap();
        let s1 = auth.login("alice", "pw").await.unwrap();
        let s2 = auth.login("alice", "pw").await.unwrap();

        auth.delete_account(&s1.token).await.unwrap();

        // User row gone, both sessions gone
        assert!(db.users().find_by_username("alice").await.unwrap().is_none());
        assert!(sessions.resolve(&s1.token).is_none());
        assert!(sessions.resolve(&s2.token).is_none());

        // And logging in again fails generically
        assert!(matches!(
            auth.login("alice", "pw").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
