//! # Session Management
//!
//! Opaque session tokens proving successful authentication.
//!
//! ## Design
//! Sessions live in memory behind a `Mutex`-guarded map: this is a
//! single-process tool, so there is nothing to persist and nothing to
//! sign. The token is a UUID v4 - unguessable, and meaningless outside
//! this process.
//!
//! The lock is held only for map operations, never across an await.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use stockroom_core::UserId;

/// Default session lifetime, in minutes.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

// =============================================================================
// Token and Session
// =============================================================================

/// Opaque proof of successful authentication.
///
/// Required by every mutating inventory operation. Carries no data;
/// everything interesting lives server-side in the [`SessionManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(Uuid);

impl SessionToken {
    fn generate() -> Self {
        SessionToken(Uuid::new_v4())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The opaque token handed back to the caller.
    pub token: SessionToken,

    /// Id of the authenticated user.
    pub user_id: UserId,

    /// Username of the authenticated user, for authorization context
    /// and display ("logged in as ...").
    pub username: String,

    /// When the session was issued.
    pub issued_at: DateTime<Utc>,

    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Session Manager
// =============================================================================

/// In-memory session table with TTL expiry and revocation.
///
/// Shared between the auth service (issues/revokes) and the inventory
/// facade (resolves) behind an `Arc`.
#[derive(Debug)]
pub struct SessionManager {
    ttl: Duration,
    sessions: Mutex<HashMap<SessionToken, Session>>,
}

impl SessionManager {
    /// Creates a manager with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }

    /// Creates a manager with a custom TTL (tests use short ones).
    pub fn with_ttl(ttl: Duration) -> Self {
        SessionManager {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Issues a fresh session for an authenticated user.
    pub fn issue(&self, user_id: UserId, username: &str) -> Session {
        let now = Utc::now();
        let session = Session {
            token: SessionToken::generate(),
            user_id,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        };

        debug!(token = %session.token, username = %username, "Session issued");

        let mut sessions = self.sessions.lock().expect("Session mutex poisoned");
        sessions.insert(session.token, session.clone());
        session
    }

    /// Resolves a token to its session.
    ///
    /// Expired sessions are dropped on the spot and resolve to `None`,
    /// exactly like tokens that never existed.
    pub fn resolve(&self, token: &SessionToken) -> Option<Session> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().expect("Session mutex poisoned");

        match sessions.get(token) {
            Some(session) if session.is_expired_at(now) => {
                debug!(token = %token, "Session expired");
                sessions.remove(token);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    /// Revokes a session (logout).
    ///
    /// ## Returns
    /// `true` when a live session was removed.
    pub fn revoke(&self, token: &SessionToken) -> bool {
        let mut sessions = self.sessions.lock().expect("Session mutex poisoned");
        let removed = sessions.remove(token).is_some();
        if removed {
            debug!(token = %token, "Session revoked");
        }
        removed
    }

    /// Revokes every session belonging to a user.
    ///
    /// Used on account deletion; the deleted user must not retain any
    /// authenticated capability.
    pub fn revoke_user(&self, user_id: UserId) -> usize {
        let mut sessions = self.sessions.lock().expect("Session mutex poisoned");
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != user_id);
        before - sessions.len()
    }

    /// Number of stored (not necessarily live) sessions.
    pub fn active_count(&self) -> usize {
        self.sessions.lock().expect("Session mutex poisoned").len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_resolve() {
        let manager = SessionManager::new();
        let session = manager.issue(UserId::new(1), "alice");

        let resolved = manager.resolve(&session.token).unwrap();
        assert_eq!(resolved.user_id, UserId::new(1));
        assert_eq!(resolved.username, "alice");
    }

    #[test]
    fn test_unknown_token_does_not_resolve() {
        let manager = SessionManager::new();
        let other = SessionManager::new().issue(UserId::new(1), "alice");

        assert!(manager.resolve(&other.token).is_none());
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let manager = SessionManager::with_ttl(Duration::zero());
        let session = manager.issue(UserId::new(1), "alice");

        assert!(manager.resolve(&session.token).is_none());
        // And it was removed, not just hidden
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn test_revoke() {
        let manager = SessionManager::new();
        let session = manager.issue(UserId::new(1), "alice");

        assert!(manager.revoke(&session.token));
        assert!(manager.resolve(&session.token).is_none());
        // Second revoke is a no-op
        assert!(!manager.revoke(&session.token));
    }

    #[test]
    fn test_revoke_user_clears_all_their_sessions() {
        let manager = SessionManager::new();
        let a1 = manager.issue(UserId::new(1), "alice");
        let a2 = manager.issue(UserId::new(1), "alice");
        let b = manager.issue(UserId::new(2), "bob");

        assert_eq!(manager.revoke_user(UserId::new(1)), 2);
        assert!(manager.resolve(&a1.token).is_none());
        assert!(manager.resolve(&a2.token).is_none());
        assert!(manager.resolve(&b.token).is_some());
    }

    #[test]
    fn test_tokens_are_unique() {
        let manager = SessionManager::new();
        let s1 = manager.issue(UserId::new(1), "alice");
        let s2 = manager.issue(UserId::new(1), "alice");
        assert_ne!(s1.token, s2.token);
    }
}
