//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the heart of Stockroom. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                            │
//! │                                                                     │
//! │  UI layer (out of scope: windows, tables, dialogs)                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stockroom-service (auth service, sessions, inventory facade)       │
//! │       │                                                             │
//! │  ┌────▼────────────────────────────────────────────────────────┐    │
//! │  │              ★ stockroom-core (THIS CRATE) ★                │    │
//! │  │                                                             │    │
//! │  │   ┌──────────┐  ┌──────────┐  ┌─────────────┐               │    │
//! │  │   │  types   │  │  money   │  │ validation  │               │    │
//! │  │   │ Product  │  │  Money   │  │   rules     │               │    │
//! │  │   └──────────┘  └──────────┘  └─────────────┘               │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                     │    │
//! │  └────┬────────────────────────────────────────────────────────┘    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stockroom-db (SQLite repositories, credential store)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, id newtypes)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and raw-field parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Money` instead of
// `use stockroom_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default low-stock threshold applied when the caller leaves the field blank.
///
/// ## Why 10?
/// Matches the schema default (`low_stock_threshold INTEGER NOT NULL DEFAULT 10`).
/// The threshold is advisory: it drives display/alerting only and is never
/// enforced by any operation in this crate.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Maximum length of a product name.
///
/// ## Business Reason
/// Keeps names usable in list views and guards against paste accidents.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 50;
