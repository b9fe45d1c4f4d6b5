//! # Product Repository
//!
//! Database operations for product records.
//!
//! ## Key Operations
//! - CRUD over the `products` table
//! - Uniqueness on `name` enforced by the schema, not a pre-check, so a
//!   race between two inserters cannot slip a duplicate through
//!
//! Every operation is exactly one statement, executed atomically against
//! the shared pool.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{Product, ProductDraft, ProductId};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.insert(&draft).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

/// Columns selected whenever a full `Product` row is materialized.
const PRODUCT_COLUMNS: &str = "id, name, category, price_cents, quantity, low_stock_threshold";

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with its store-assigned id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product, id from `last_insert_rowid`
    /// * `Err(DbError::UniqueViolation)` - Name already exists
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<Product> {
        debug!(name = %draft.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, price_cents, quantity, low_stock_threshold)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price_cents)
        .bind(draft.quantity)
        .bind(draft.low_stock_threshold)
        .execute(&self.pool)
        .await?;

        let id = ProductId::new(result.last_insert_rowid());
        debug!(%id, name = %draft.name, "Product inserted");

        Ok(Product {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            price_cents: draft.price_cents,
            quantity: draft.quantity,
            low_stock_threshold: draft.low_stock_threshold,
        })
    }

    /// Lists all products in insertion order.
    ///
    /// Produces a finite, re-runnable snapshot, not a live cursor. Callers
    /// refresh after every mutation rather than holding rows.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its unique name (case-sensitive).
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites all fields of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No row matched the id
    /// * `Err(DbError::UniqueViolation)` - Renamed onto an existing name
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> DbResult<()> {
        debug!(%id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                category = ?3,
                price_cents = ?4,
                quantity = ?5,
                low_stock_threshold = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price_cents)
        .bind(draft.quantity)
        .bind(draft.low_stock_threshold)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", id));
        }

        Ok(())
    }

    /// Deletes a product by id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No row matched the id
    pub async fn delete(&self, id: ProductId) -> DbResult<()> {
        debug!(%id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::Money;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn draft(name: &str, cents: i64, quantity: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: Some("Tools".to_string()),
            price_cents: Money::from_cents(cents),
            quantity,
            low_stock_threshold: 10,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_in_order() {
        let db = test_db().await;
        let repo = db.products();

        let a = repo.insert(&draft("Widget", 999, 5)).await.unwrap();
        let b = repo.insert(&draft("Gadget", 1250, 3)).await.unwrap();

        assert!(a.id < b.id);
        assert_eq!(a.name, "Widget");
        assert_eq!(a.price_cents, Money::from_cents(999));
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_rejected() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&draft("Widget", 999, 5)).await.unwrap();
        let err = repo.insert(&draft("Widget", 100, 1)).await.unwrap_err();

        assert!(err.is_unique_violation());
        // Still exactly one Widget row
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order_snapshot() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&draft("Widget", 999, 5)).await.unwrap();
        repo.insert(&draft("Gadget", 1250, 3)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Widget");
        assert_eq!(all[1].name, "Gadget");
    }

    #[tokio::test]
    async fn test_get_by_id_and_name() {
        let db = test_db().await;
        let repo = db.products();

        let inserted = repo.insert(&draft("Widget", 999, 5)).await.unwrap();

        let by_id = repo.get_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(by_id, inserted);

        let by_name = repo.get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(by_name.id, inserted.id);

        assert!(repo.get_by_id(ProductId::new(999)).await.unwrap().is_none());
        assert!(repo.get_by_name("widget").await.unwrap().is_none()); // case-sensitive
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let db = test_db().await;
        let repo = db.products();

        let inserted = repo.insert(&draft("Widget", 999, 5)).await.unwrap();

        let new_draft = ProductDraft {
            name: "Widget Pro".to_string(),
            category: None,
            price_cents: Money::from_cents(1499),
            quantity: 8,
            low_stock_threshold: 2,
        };
        repo.update(inserted.id, &new_draft).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1); // no duplicate row
        assert_eq!(all[0].name, "Widget Pro");
        assert_eq!(all[0].category, None);
        assert_eq!(all[0].price_cents, Money::from_cents(1499));
        assert_eq!(all[0].quantity, 8);
        assert_eq!(all[0].low_stock_threshold, 2);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let err = repo
            .update(ProductId::new(42), &draft("Ghost", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let repo = db.products();

        let inserted = repo.insert(&draft("Widget", 999, 5)).await.unwrap();
        repo.delete(inserted.id).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());

        // Deleting again reports NotFound
        let err = repo.delete(inserted.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
