//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for Stockroom. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                            │
//! │                                                                     │
//! │  stockroom-service (auth, sessions, inventory facade)               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                  stockroom-db (THIS CRATE)                  │    │
//! │  │                                                             │    │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐    │    │
//! │  │   │  Database   │   │ Repositories │   │  Migrations  │    │    │
//! │  │   │  (pool.rs)  │◄──│ product.rs   │   │  (embedded)  │    │    │
//! │  │   │ SqlitePool  │   │ user.rs      │   │ 001_init.sql │    │    │
//! │  │   └─────────────┘   └──────────────┘   └──────────────┘    │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, configuration, bootstrap
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("./stockroom.db")).await?;
//!
//! // Ensure the default admin account exists (idempotent)
//! db.bootstrap().await?;
//!
//! // Use repositories
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::user::{UserRecord, UserRepository};
