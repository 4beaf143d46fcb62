//! # zaviar-core: Pure Business Logic for Zaviar Books
//!
//! This crate is the **heart** of Zaviar Books, the bookkeeping core for a
//! small concrete-products factory. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Zaviar Books Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (forms, dashboards)               │   │
//! │  │   Record entry ──► Inventory ──► Ledgers ──► Worker payroll    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ zaviar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  record  │ │ catalog  │ │ payment  │ │     reports      │  │   │
//! │  │   │  7 types │ │ articles │ │ tracker  │ │ inventory/ledger │  │   │
//! │  │   │ + enum   │ │ resolve  │ │ settle   │ │ workers/daily    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  zaviar-db (Persistence Layer)                  │   │
//! │  │        SQLite-backed key-value store, record log, roster        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - The seven record types and the tagged [`record::Record`] enum
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Shared domain types (ArticleRef, PaymentStatus, Worker, ...)
//! - [`catalog`] - The static article catalog and reference resolution
//! - [`payment`] - Incremental payment application for sales/purchases
//! - [`reports`] - The derivation engine: every view, recomputed from the log
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Append-mostly log**: records are created, deleted, or payment-updated;
//!    never edited in place
//! 2. **Derived, never stored**: stock levels, balances, and payment status
//!    are recomputed from the log on every read
//! 3. **Integer Money**: all monetary values are in paisa (i64) to avoid
//!    float errors
//! 4. **No clock, no I/O**: callers pass dates in; persistence lives in
//!    zaviar-db
//!
//! ## Example Usage
//!
//! ```rust
//! use zaviar_core::money::Money;
//! use zaviar_core::record::{Record, SaleRecord};
//! use zaviar_core::types::{ArticleRef, PaymentStatus};
//!
//! let sale: Record = SaleRecord::new(
//!     "2026-08-25".parse().unwrap(),
//!     ArticleRef::catalog("rt"),
//!     30,
//!     Money::from_rupees(90),
//!     "Haji Traders",
//!     None,
//!     None,
//! )
//! .unwrap()
//! .into();
//!
//! // 30 × Rs. 90 = Rs. 2700, unpaid until a payment is applied
//! assert_eq!(sale.gross_amount(), Money::from_rupees(2700));
//! assert_eq!(sale.payment_status(), Some(PaymentStatus::Due));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod payment;
pub mod record;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use zaviar_core::Money` instead of
// `use zaviar_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use payment::apply_payment;
pub use record::Record;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted on a single record
///
/// ## Business Reason
/// Prevents fat-finger entries (e.g., typing 1000000 instead of 100) from
/// silently distorting inventory. The factory's largest real batches are in
/// the low thousands.
pub const MAX_QUANTITY_PER_RECORD: i64 = 100_000;

/// Maximum length of a counterparty or custom-item name
///
/// ## Business Reason
/// Names are free text from the entry forms; a bound keeps pasted junk out
/// of the log.
pub const MAX_PARTY_NAME_LEN: usize = 120;
