//! # Order Snapshot Repository
//!
//! Database operations for order snapshots.
//!
//! ## Write-Once Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Order Snapshot Lifecycle                          │
//! │                                                                     │
//! │  1. CREATE                                                          │
//! │     └── insert() → { id, reference, created_at } server-assigned    │
//! │                                                                     │
//! │  2. READ                                                            │
//! │     └── list() newest first / get_by_id()                           │
//! │                                                                     │
//! │  3. (RARE) UPDATE                                                   │
//! │     └── update() touches payload, amounts, currency ONLY:           │
//! │         id, reference and created_at are never in the SET clause    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are caller-supplied. Nothing here recomputes subtotal, shipping,
//! tax or total.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use lumberyard_core::{Money, OrderSnapshot, DEFAULT_CURRENCY};

const ORDER_SELECT: &str = r#"
SELECT
    id,
    reference,
    payload,
    subtotal_cents,
    shipping_cents,
    tax_cents,
    total_cents,
    currency,
    created_at
FROM order_snapshots
"#;

/// Repository for order snapshot database operations.
#[derive(Debug, Clone)]
pub struct OrderSnapshotRepository {
    pool: SqlitePool,
}

impl OrderSnapshotRepository {
    /// Creates a new OrderSnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderSnapshotRepository { pool }
    }

    /// Lists snapshots, newest first.
    pub async fn list(&self) -> DbResult<Vec<OrderSnapshot>> {
        let snapshots = sqlx::query_as::<_, OrderSnapshot>(&format!(
            "{ORDER_SELECT} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = snapshots.len(), "Listed order snapshots");
        Ok(snapshots)
    }

    /// Gets a snapshot by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<OrderSnapshot>> {
        let snapshot = sqlx::query_as::<_, OrderSnapshot>(&format!(
            "{ORDER_SELECT} WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(snapshot)
    }

    /// Gets a snapshot by its public reference.
    pub async fn get_by_reference(&self, reference: &str) -> DbResult<Option<OrderSnapshot>> {
        let snapshot = sqlx::query_as::<_, OrderSnapshot>(&format!(
            "{ORDER_SELECT} WHERE reference = ?1"
        ))
        .bind(reference)
        .fetch_optional(&self.pool)
        .await?;

        Ok(snapshot)
    }

    /// Inserts a snapshot.
    ///
    /// The caller builds it via [`build_snapshot`] so that `id`,
    /// `reference` and `created_at` are always server-assigned.
    pub async fn insert(&self, snapshot: &OrderSnapshot) -> DbResult<()> {
        debug!(reference = %snapshot.reference, "Inserting order snapshot");

        sqlx::query(
            r#"
            INSERT INTO order_snapshots (
                id, reference, payload,
                subtotal_cents, shipping_cents, tax_cents, total_cents,
                currency, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&snapshot.id)
        .bind(&snapshot.reference)
        .bind(Json(&snapshot.payload))
        .bind(snapshot.subtotal)
        .bind(snapshot.shipping)
        .bind(snapshot.tax)
        .bind(snapshot.total)
        .bind(&snapshot.currency)
        .bind(snapshot.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates the writable fields of a snapshot.
    ///
    /// `id`, `reference` and `created_at` are deliberately absent from the
    /// SET clause; they cannot change after creation.
    pub async fn update(&self, snapshot: &OrderSnapshot) -> DbResult<()> {
        debug!(id = %snapshot.id, "Updating order snapshot");

        let result = sqlx::query(
            r#"
            UPDATE order_snapshots SET
                payload = ?2,
                subtotal_cents = ?3,
                shipping_cents = ?4,
                tax_cents = ?5,
                total_cents = ?6,
                currency = ?7
            WHERE id = ?1
            "#,
        )
        .bind(&snapshot.id)
        .bind(Json(&snapshot.payload))
        .bind(snapshot.subtotal)
        .bind(snapshot.shipping)
        .bind(snapshot.tax)
        .bind(snapshot.total)
        .bind(&snapshot.currency)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("OrderSnapshot", &snapshot.id));
        }

        Ok(())
    }

    /// Deletes a snapshot.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting order snapshot");

        let result = sqlx::query("DELETE FROM order_snapshots WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("OrderSnapshot", id));
        }

        Ok(())
    }

    /// Counts snapshots (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_snapshots")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Builds a snapshot with server-assigned id, reference and timestamp.
///
/// Totals come in pre-computed; this function stores, never calculates.
pub fn build_snapshot(
    payload: serde_json::Value,
    subtotal: Money,
    shipping: Money,
    tax: Money,
    total: Money,
    currency: Option<String>,
) -> OrderSnapshot {
    OrderSnapshot {
        id: Uuid::new_v4().to_string(),
        reference: Uuid::new_v4().to_string(),
        payload,
        subtotal,
        shipping,
        tax,
        total,
        currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        created_at: Utc::now(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Duration;
    use serde_json::json;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_snapshot() -> OrderSnapshot {
        build_snapshot(
            json!({"items": [{"slug": "walnut", "qty": 2}]}),
            Money::from_cents(25100),
            Money::from_cents(1500),
            Money::from_cents(2071),
            Money::from_cents(28671),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = test_db().await;
        let repo = db.orders();

        let snapshot = sample_snapshot();
        repo.insert(&snapshot).await.unwrap();

        let fetched = repo.get_by_id(&snapshot.id).await.unwrap().unwrap();
        assert_eq!(fetched.reference, snapshot.reference);
        assert_eq!(fetched.total, Money::from_cents(28671));
        assert_eq!(fetched.currency, "USD");
        assert_eq!(fetched.payload["items"][0]["slug"], "walnut");
    }

    #[tokio::test]
    async fn test_get_by_reference() {
        let db = test_db().await;
        let repo = db.orders();

        let snapshot = sample_snapshot();
        repo.insert(&snapshot).await.unwrap();

        let found = repo
            .get_by_reference(&snapshot.reference)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, snapshot.id);

        assert!(repo.get_by_reference("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reference_is_unique() {
        let db = test_db().await;
        let repo = db.orders();

        let first = sample_snapshot();
        repo.insert(&first).await.unwrap();

        let mut clashing = sample_snapshot();
        clashing.reference = first.reference.clone();
        let err = repo.insert(&clashing).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let db = test_db().await;
        let repo = db.orders();

        // Whole-second spacing keeps the ordering unambiguous
        let base = Utc::now();
        let mut ids = Vec::new();
        for offset in [2i64, 1, 0] {
            let mut snapshot = sample_snapshot();
            snapshot.created_at = base - Duration::seconds(offset);
            repo.insert(&snapshot).await.unwrap();
            ids.push(snapshot.id);
        }

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        // Inserted oldest-first, listed newest-first
        assert_eq!(listed[0].id, ids[2]);
        assert_eq!(listed[1].id, ids[1]);
        assert_eq!(listed[2].id, ids[0]);
    }

    #[tokio::test]
    async fn test_update_never_touches_reference_or_created_at() {
        let db = test_db().await;
        let repo = db.orders();

        let snapshot = sample_snapshot();
        repo.insert(&snapshot).await.unwrap();

        let stored = repo.get_by_id(&snapshot.id).await.unwrap().unwrap();

        let mut tampered = stored.clone();
        tampered.reference = "forged-reference".to_string();
        tampered.currency = "EUR".to_string();
        repo.update(&tampered).await.unwrap();

        let fetched = repo.get_by_id(&snapshot.id).await.unwrap().unwrap();
        assert_eq!(fetched.reference, snapshot.reference);
        assert_eq!(fetched.created_at, stored.created_at);
        assert_eq!(fetched.currency, "EUR");
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.orders();

        let snapshot = sample_snapshot();
        repo.insert(&snapshot).await.unwrap();
        repo.delete(&snapshot.id).await.unwrap();

        assert!(repo.get_by_id(&snapshot.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&snapshot.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
