//! # stockroom-service: Auth Service and Inventory Facade
//!
//! The layer a presentation front-end attaches to. It owns sessions and
//! input validation; it never renders anything itself.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Session-Gated CRUD                             │
//! │                                                                     │
//! │  AuthService::login ──► Session (opaque token)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Inventory::add_product(token, form)                                │
//! │       │   1. resolve token (absent/expired → Unauthorized)          │
//! │       │   2. parse + validate raw fields (ValidationError)          │
//! │       │   3. delegate to ProductRepository                          │
//! │       ▼                                                             │
//! │  Inventory::refresh(token) ──► Vec<Product> for the table view      │
//! │                                                                     │
//! │  Per session: Unauthenticated → Authenticated on login;             │
//! │  back to Unauthenticated on logout, expiry, or account deletion.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Opaque tokens, TTL expiry, revocation
//! - [`auth`] - Registration, login, logout, account deletion
//! - [`inventory`] - Validated product CRUD behind the session gate
//! - [`error`] - `AuthError` and `InventoryError`

pub mod auth;
pub mod error;
pub mod inventory;
pub mod session;

pub use auth::AuthService;
pub use error::{AuthError, InventoryError};
pub use inventory::{Inventory, ProductForm};
pub use session::{Session, SessionManager, SessionToken};
