//! # Store Module
//!
//! Persistent stores for Zaviar Books' two collections.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Pattern Explained                            │
//! │                                                                         │
//! │  Each store owns one collection in memory and one storage key on disk. │
//! │                                                                         │
//! │  Presentation                                                          │
//! │       │                                                                 │
//! │       │  store.append(sale.into()).await?                               │
//! │       ▼                                                                 │
//! │  RecordStore                                                           │
//! │  ├── records(&self)            read the in-memory log                  │
//! │  ├── append(&mut self, rec)    mutate, then persist whole blob         │
//! │  ├── delete(&mut self, id)     mutate, then persist whole blob         │
//! │  └── apply_payment(&mut, ..)   domain rule first, then persist         │
//! │       │                                                                 │
//! │       │  kv_put(key, json)                                              │
//! │       ▼                                                                 │
//! │  SQLite key_values table                                               │
//! │                                                                         │
//! │  Mutations take &mut self: the single-writer discipline is enforced    │
//! │  by the borrow checker, not by a lock.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`records::RecordStore`] - the append/delete-only record log
//! - [`workers::WorkerRoster`] - the worker roster

pub mod records;
pub mod workers;
