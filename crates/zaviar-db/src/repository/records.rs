//! # Record Store
//!
//! The persistent record log: an in-memory `Vec<Record>` kept
//! most-recent-first, mirrored to one JSON blob on every mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RecordStore Lifecycle                            │
//! │                                                                         │
//! │  RecordStore::load(db).await                                           │
//! │       │                                                                 │
//! │       ├── key absent        → empty log (first launch)                 │
//! │       ├── blob parses       → full log in memory                       │
//! │       └── blob corrupted    → WARN + empty log (fail-soft; the bad     │
//! │           blob stays on disk untouched until the first write)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  append / delete / apply_payment                                       │
//! │       │                                                                 │
//! │       └── mutate Vec, then persist the WHOLE log under the key         │
//! │           (a failed write surfaces as DbError; memory and disk may     │
//! │            then differ until the next successful persist)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are never edited in place: the only mutations are append,
//! delete, and the payment tracker's `amount_paid` increment.

use tracing::{debug, warn};
use zaviar_core::money::Money;
use zaviar_core::record::Record;

use crate::error::{DbError, DbResult};
use crate::pool::Database;

/// Storage key for the record log blob.
pub const RECORDS_KEY: &str = "concrete_factory_records_v4";

/// The persistent record log.
///
/// Holds the full log in memory; every read view derives from
/// [`RecordStore::records`] via `zaviar_core::reports`.
#[derive(Debug)]
pub struct RecordStore {
    db: Database,
    /// Most-recent-first; new records are inserted at the head.
    records: Vec<Record>,
}

impl RecordStore {
    /// Loads the record log from the database.
    ///
    /// Fail-soft: a missing key or an unparseable blob yields an empty log
    /// rather than an error, so one corrupted write can never brick the
    /// books. The corrupted blob is logged and left on disk as-is until
    /// the next successful persist overwrites it.
    pub async fn load(db: Database) -> DbResult<Self> {
        let records = match db.kv_get(RECORDS_KEY).await? {
            None => {
                debug!(key = RECORDS_KEY, "No record log found, starting empty");
                Vec::new()
            }
            Some(blob) => match serde_json::from_str::<Vec<Record>>(&blob) {
                Ok(records) => {
                    debug!(count = records.len(), "Record log loaded");
                    records
                }
                Err(err) => {
                    warn!(
                        key = RECORDS_KEY,
                        error = %err,
                        "Stored record log is unreadable, starting empty"
                    );
                    Vec::new()
                }
            },
        };

        Ok(RecordStore { db, records })
    }

    /// The full log, most-recent-first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Appends a new record at the head of the log and persists.
    pub async fn append(&mut self, record: Record) -> DbResult<()> {
        debug!(id = record.id(), "Appending record");
        self.records.insert(0, record);
        self.persist().await
    }

    /// Deletes a record by id and persists.
    ///
    /// Returns whether a record was actually removed; deleting an unknown
    /// id is a no-op, not an error (the id may already be gone).
    pub async fn delete(&mut self, id: &str) -> DbResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        if self.records.len() == before {
            debug!(id, "Delete requested for unknown record id, no-op");
            return Ok(false);
        }

        self.persist().await?;
        Ok(true)
    }

    /// Applies an additional payment to the Sale/Purchase record with the
    /// given id, then persists.
    ///
    /// Domain rules (positive amount, no overpayment) are enforced by
    /// [`zaviar_core::apply_payment`]; a rejected payment leaves both the
    /// log and the stored blob untouched.
    pub async fn apply_payment(&mut self, id: &str, amount: Money) -> DbResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DbError::not_found("Record", id))?;

        zaviar_core::apply_payment(record, amount)?;
        self.persist().await
    }

    /// Writes the whole log as one JSON blob under [`RECORDS_KEY`].
    async fn persist(&self) -> DbResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.db.kv_put(RECORDS_KEY, &blob).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use chrono::NaiveDate;
    use zaviar_core::record::{ExpenseRecord, SaleRecord};
    use zaviar_core::types::{ArticleRef, PaymentStatus};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sale() -> Record {
        SaleRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("rt"),
            30,
            Money::from_rupees(90),
            "Haji Traders",
            None,
            None,
        )
        .unwrap()
        .into()
    }

    fn expense() -> Record {
        ExpenseRecord::new(day("2026-08-25"), "Diesel", Money::from_rupees(1500), None)
            .unwrap()
            .into()
    }

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_starts_empty_on_fresh_database() {
        let store = RecordStore::load(fresh_db().await).await.unwrap();
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_append_is_most_recent_first() {
        let mut store = RecordStore::load(fresh_db().await).await.unwrap();

        let first = sale();
        let second = expense();
        let second_id = second.id().to_string();

        store.append(first).await.unwrap();
        store.append(second).await.unwrap();

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].id(), second_id);
    }

    #[tokio::test]
    async fn test_log_survives_reload() {
        let db = fresh_db().await;

        let rec = sale();
        let id = rec.id().to_string();
        {
            let mut store = RecordStore::load(db.clone()).await.unwrap();
            store.append(rec).await.unwrap();
        }

        // In-memory SQLite: same pool, fresh store
        let store = RecordStore::load(db).await.unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id(), id);
    }

    #[tokio::test]
    async fn test_delete_roundtrip_and_unknown_id_noop() {
        let mut store = RecordStore::load(fresh_db().await).await.unwrap();

        let rec = sale();
        let id = rec.id().to_string();
        store.append(rec).await.unwrap();
        store.append(expense()).await.unwrap();

        assert!(store.delete(&id).await.unwrap());
        assert_eq!(store.records().len(), 1);
        assert!(store.get(&id).is_none());

        // Second delete of the same id is a clean no-op
        assert!(!store.delete(&id).await.unwrap());
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupted_blob_loads_empty() {
        let db = fresh_db().await;
        db.kv_put(RECORDS_KEY, "{not json[").await.unwrap();

        let store = RecordStore::load(db).await.unwrap();
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_payment_applies_and_persists() {
        let db = fresh_db().await;
        let mut store = RecordStore::load(db.clone()).await.unwrap();

        let rec = sale(); // Rs. 2700 total
        let id = rec.id().to_string();
        store.append(rec).await.unwrap();

        store
            .apply_payment(&id, Money::from_rupees(1000))
            .await
            .unwrap();
        assert_eq!(
            store.get(&id).unwrap().payment_status(),
            Some(PaymentStatus::PartiallyPaid)
        );

        // The payment survived persistence
        let reloaded = RecordStore::load(db).await.unwrap();
        assert_eq!(
            reloaded.get(&id).unwrap().amount_paid(),
            Money::from_rupees(1000)
        );
    }

    #[tokio::test]
    async fn test_payment_rejections_surface() {
        let mut store = RecordStore::load(fresh_db().await).await.unwrap();

        let rec = sale(); // Rs. 2700 total
        let id = rec.id().to_string();
        store.append(rec).await.unwrap();

        // Overpayment is a domain error
        let err = store
            .apply_payment(&id, Money::from_rupees(5000))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Core(_)));

        // Unknown id is a store error
        let err = store
            .apply_payment("no-such-id", Money::from_rupees(100))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
