//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API. Callers never see SQL.                                        │
//! │                                                                     │
//! │  Inventory facade                                                   │
//! │       │  db.products().insert(&draft)                               │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── insert(&self, draft)                                           │
//! │  ├── list(&self)                                                    │
//! │  ├── update(&self, id, draft)                                       │
//! │  └── delete(&self, id)                                              │
//! │       │  single SQL statement, atomic                               │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD
//! - [`user::UserRepository`] - Credential storage and verification

pub mod product;
pub mod user;
