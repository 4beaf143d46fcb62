//! # Worker Roster
//!
//! The persistent worker roster, mirrored to one JSON blob like the record
//! log. Small (a handful of workers), loaded whole, written whole.
//!
//! ## Removal Semantics
//! Removing a worker takes them off the ROSTER only. Their historical
//! records stay in the log untouched, so old production and payouts still
//! appear in ledgers and worker history after removal.

use tracing::{debug, warn};
use zaviar_core::types::Worker;

use crate::error::DbResult;
use crate::pool::Database;

/// Storage key for the worker roster blob.
pub const WORKERS_KEY: &str = "concrete_factory_workers_v1";

/// The persistent worker roster.
#[derive(Debug)]
pub struct WorkerRoster {
    db: Database,
    /// Roster order; new workers join at the tail.
    workers: Vec<Worker>,
}

impl WorkerRoster {
    /// Loads the roster from the database.
    ///
    /// Fail-soft like the record log: missing key or unreadable blob
    /// yields an empty roster with a warning, never an error.
    pub async fn load(db: Database) -> DbResult<Self> {
        let workers = match db.kv_get(WORKERS_KEY).await? {
            None => {
                debug!(key = WORKERS_KEY, "No worker roster found, starting empty");
                Vec::new()
            }
            Some(blob) => match serde_json::from_str::<Vec<Worker>>(&blob) {
                Ok(workers) => {
                    debug!(count = workers.len(), "Worker roster loaded");
                    workers
                }
                Err(err) => {
                    warn!(
                        key = WORKERS_KEY,
                        error = %err,
                        "Stored worker roster is unreadable, starting empty"
                    );
                    Vec::new()
                }
            },
        };

        Ok(WorkerRoster { db, workers })
    }

    /// All workers, in roster order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Looks up a worker by id.
    pub fn get(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Adds a worker to the roster and persists.
    pub async fn add(&mut self, worker: Worker) -> DbResult<()> {
        debug!(id = %worker.id, name = %worker.name, "Adding worker");
        self.workers.push(worker);
        self.persist().await
    }

    /// Removes a worker from the roster and persists.
    ///
    /// Returns whether a worker was actually removed. The record log is
    /// not touched: historical records referencing the worker remain.
    pub async fn remove(&mut self, id: &str) -> DbResult<bool> {
        let before = self.workers.len();
        self.workers.retain(|w| w.id != id);

        if self.workers.len() == before {
            debug!(id, "Remove requested for unknown worker id, no-op");
            return Ok(false);
        }

        self.persist().await?;
        Ok(true)
    }

    /// Writes the whole roster as one JSON blob under [`WORKERS_KEY`].
    async fn persist(&self) -> DbResult<()> {
        let blob = serde_json::to_string(&self.workers)?;
        self.db.kv_put(WORKERS_KEY, &blob).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
