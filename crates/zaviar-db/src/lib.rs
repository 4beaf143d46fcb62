//! # zaviar-db: Persistence Layer for Zaviar Books
//!
//! This crate provides persistence for the Zaviar Books bookkeeping core.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Zaviar Books Data Flow                             │
//! │                                                                         │
//! │  Presentation (record entry form)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     zaviar-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │    Stores     │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (records.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │ (workers.rs)  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ RecordStore   │    │ 001_kv.sql   │  │   │
//! │  │   │ kv_get/kv_put │    │ WorkerRoster  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │        key_values(key, value) ← whole-log JSON snapshots        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and the key-value primitive
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Persistence error types
//! - [`repository`] - The record log and worker roster stores
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zaviar_db::{Database, DbConfig, RecordStore};
//!
//! let db = Database::new(DbConfig::new("path/to/books.db")).await?;
//! let mut records = RecordStore::load(db.clone()).await?;
//!
//! records.append(sale.into()).await?;
//! let stock = zaviar_core::reports::inventory_snapshot(records.records(), &catalog);
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
pub use pool::{Database, DbConfig};

// Store re-exports for convenience
pub use repository::records::RecordStore;
pub use repository::workers::WorkerRoster;
