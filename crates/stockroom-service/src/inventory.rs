//! # Inventory Facade
//!
//! Validated product CRUD behind the session gate. This is the surface a
//! table-and-dialogs UI calls into; it owns all raw-field parsing so the
//! repository only ever sees typed, validated values.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  add_product(token, ProductForm { price: "9.99", quantity: "5" })   │
//! │       │                                                             │
//! │       ├── resolve token ──────────── absent/expired → Unauthorized  │
//! │       │                                                             │
//! │       ├── parse fields once ──────── bad entry → ValidationError    │
//! │       │   (nothing has touched storage yet)                         │
//! │       │                                                             │
//! │       └── repository insert ──────── UNIQUE(name) → DuplicateName   │
//! │                                                                     │
//! │  refresh(token) after every mutation resynchronizes the view.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::InventoryError;
use crate::session::{Session, SessionManager, SessionToken};
use stockroom_core::validation::{
    normalize_category, parse_price, parse_quantity, parse_threshold, validate_product_name,
};
use stockroom_core::{Product, ProductDraft, ProductId, ValidationError};
use stockroom_db::{Database, ProductRepository};

// =============================================================================
// Form DTO
// =============================================================================

/// Raw product fields exactly as a UI collects them: strings from entry
/// widgets, untrimmed, unparsed.
///
/// ## Why Strings?
/// The presentation layer shouldn't guess at numeric parsing rules; the
/// facade parses each field exactly once and returns a reason the UI can
/// show verbatim when an entry is bad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    /// Blank means "use the default threshold of 10".
    pub low_stock_threshold: String,
}

impl ProductForm {
    /// Parses and validates every field, producing a typed draft.
    ///
    /// Fails on the first invalid field; nothing reaches storage on any
    /// failure path.
    fn parse(&self) -> Result<ProductDraft, ValidationError> {
        Ok(ProductDraft {
            name: validate_product_name(&self.name)?,
            category: normalize_category(&self.category),
            price_cents: parse_price(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
            low_stock_threshold: parse_threshold(&self.low_stock_threshold)?,
        })
    }
}

// =============================================================================
// Facade
// =============================================================================

/// Session-gated inventory operations.
///
/// Every method takes a [`SessionToken`] and rejects absent or expired
/// sessions with `Unauthorized` before doing anything else.
pub struct Inventory {
    products: ProductRepository,
    sessions: Arc<SessionManager>,
}

impl Inventory {
    /// Creates the facade over the shared database handle.
    pub fn new(db: &Database, sessions: Arc<SessionManager>) -> Self {
        Inventory {
            products: db.products(),
            sessions,
        }
    }

    /// Adds a product from raw form fields.
    ///
    /// ## Errors
    /// * `Unauthorized` - no live session for the token
    /// * `Validation` - a field failed to parse (with the reason)
    /// * `DuplicateName` - a product with that name exists
    pub async fn add_product(
        &self,
        token: &SessionToken,
        form: &ProductForm,
    ) -> Result<Product, InventoryError> {
        let session = self.authorize(token)?;
        let draft = form.parse()?;

        debug!(user = %session.username, name = %draft.name, "add_product");

        let product = self.products.insert(&draft).await.map_err(|e| {
            // Insert has no id yet; a NotFound can't occur here
            InventoryError::from_mutation(e, ProductId::new(0), &draft.name)
        })?;

        info!(user = %session.username, id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Overwrites all fields of an existing product.
    ///
    /// The id comes from a prior [`refresh`](Self::refresh); it is typed,
    /// never a display string.
    ///
    /// ## Errors
    /// * `Unauthorized` / `Validation` as for add
    /// * `NotFound` - no row matched the id
    /// * `DuplicateName` - renamed onto another product's name
    pub async fn edit_product(
        &self,
        token: &SessionToken,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<(), InventoryError> {
        let session = self.authorize(token)?;
        let draft = form.parse()?;

        debug!(user = %session.username, %id, "edit_product");

        self.products
            .update(id, &draft)
            .await
            .map_err(|e| InventoryError::from_mutation(e, id, &draft.name))?;

        info!(user = %session.username, %id, "Product updated");
        Ok(())
    }

    /// Removes the selected product.
    ///
    /// Takes the caller's table selection as-is: `None` (nothing
    /// selected) is an explicit `ValidationError::NoSelection` rather
    /// than a silent precondition.
    pub async fn remove_product(
        &self,
        token: &SessionToken,
        selection: Option<ProductId>,
    ) -> Result<(), InventoryError> {
        let session = self.authorize(token)?;
        let id = selection.ok_or(ValidationError::NoSelection)?;

        debug!(user = %session.username, %id, "remove_product");

        self.products.delete(id).await.map_err(|e| {
            InventoryError::from_mutation(e, id, "")
        })?;

        info!(user = %session.username, %id, "Product removed");
        Ok(())
    }

    /// Returns a fresh snapshot of all products.
    ///
    /// Thin pass-through to the repository; intended to be called after
    /// every mutation to resynchronize any cached view.
    pub async fn refresh(&self, token: &SessionToken) -> Result<Vec<Product>, InventoryError> {
        self.authorize(token)?;
        self.products.list().await.map_err(InventoryError::Storage)
    }

    /// Resolves the token or fails with `Unauthorized`.
    fn authorize(&self, token: &SessionToken) -> Result<Session, InventoryError> {
        self.sessions
            .resolve(token)
            .ok_or(InventoryError::Unauthorized)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
