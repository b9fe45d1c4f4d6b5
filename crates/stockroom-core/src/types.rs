//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────┐      ┌──────────────────┐                     │
//! │  │     Product      │      │   ProductDraft   │                     │
//! │  │  ──────────────  │      │  ──────────────  │                     │
//! │  │  id (ProductId)  │ ◄─── │  name            │  validated payload  │
//! │  │  name            │      │  category        │  for insert/update, │
//! │  │  category        │      │  price (Money)   │  no id yet          │
//! │  │  price (Money)   │      │  quantity        │                     │
//! │  │  quantity        │      │  threshold       │                     │
//! │  │  threshold       │      └──────────────────┘                     │
//! │  └──────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Typed Identifiers
//! `ProductId` and `UserId` are integer newtypes assigned by the store on
//! creation. Ids are parsed once at the boundary and never carried as
//! display strings internally.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique product identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw row id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique user identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw row id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        UserId(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record as stored in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (integer, store-assigned).
    pub id: ProductId,

    /// Display name; unique across all products.
    pub name: String,

    /// Optional category label.
    pub category: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: Money,

    /// Units on hand; never negative.
    pub quantity: i64,

    /// Quantity below which stock is considered low. Advisory only:
    /// surfaced to the caller for display/alerting, never enforced.
    pub low_stock_threshold: i64,
}

impl Product {
    /// Returns the price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price_cents
    }

    /// Whether the current quantity is below the advisory threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.low_stock_threshold
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// A fully validated product payload, ready for insert or update.
///
/// ## Why a Separate Type?
/// Raw form fields arrive as strings from the presentation layer. The
/// facade parses them exactly once; from there on, only this typed value
/// circulates. A `ProductDraft` in hand means validation already passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Trimmed, non-empty product name.
    pub name: String,

    /// Normalized category: trimmed, `None` when left blank.
    pub category: Option<String>,

    /// Non-negative price in cents.
    pub price_cents: Money,

    /// Non-negative unit count.
    pub quantity: i64,

    /// Non-negative advisory threshold.
    pub low_stock_threshold: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: i64, threshold: i64) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            category: Some("Tools".to_string()),
            price_cents: Money::from_cents(999),
            quantity,
            low_stock_threshold: threshold,
        }
    }

    #[test]
    fn test_is_low_stock() {
        assert!(widget(5, 10).is_low_stock());
        assert!(!widget(10, 10).is_low_stock()); // at threshold is not low
        assert!(!widget(50, 10).is_low_stock());
        assert!(widget(0, 1).is_low_stock());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(UserId::new(7).to_string(), "7");
    }
}
