//! # Domain Types
//!
//! Reference data and shared value types used throughout Zaviar Books.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Article      │   │   ArticleRef    │   │     Worker      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  Catalog(id)    │   │  id (UUID)      │       │
//! │  │  name, unit     │   │  Custom(name)   │   │  name, phone    │       │
//! │  │  category       │   │                 │   │  joining_date   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PaymentStatus   │   │  BalanceSide    │   │   DateRange     │       │
//! │  │  Paid           │   │  Customer       │   │  start ..= end  │       │
//! │  │  PartiallyPaid  │   │  Supplier       │   │  (inclusive)    │       │
//! │  │  Due            │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## ArticleRef Instead of a Sentinel Id
//! The books track both cataloged articles and one-off custom items. Rather
//! than a magic `"other"` article id plus a side-channel custom name, the
//! reference is an explicit sum type: match sites handle both arms or they
//! don't compile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Article Catalog Types
// =============================================================================

/// Category an article belongs to.
///
/// Categories drive the production report grouping and which articles the
/// presentation layer offers in which form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ArticleCategory {
    /// Roof articles (kari, roof tiles, khaprail).
    Roof,
    /// Floor tiles and paver blocks.
    Floor,
    /// General prepared articles and raw materials.
    Material,
    /// Items bought in from other factories.
    Imported,
    /// Free-form custom items.
    Other,
}

/// A catalog entry describing a producible/tradeable item.
///
/// Reference data: immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Article {
    /// Stable catalog key (e.g. `"k6"`, `"cmt"`).
    pub id: String,
    /// Display name shown in reports and ledgers.
    pub name: String,
    /// Measurement unit (`"pcs"`, `"bags"`, `"cum"`).
    pub unit: String,
    /// Grouping category.
    pub category: ArticleCategory,
}

/// Reference from a record to the item it concerns.
///
/// ## Why a Sum Type
/// A sentinel id plus an optional override-name field would leak string
/// special-casing into every aggregation. Here the two cases are explicit,
/// and an `ArticleRef` is directly usable as a stock-keeping key (it
/// derives `Eq + Hash`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArticleRef {
    /// A cataloged article, by catalog id.
    Catalog(String),
    /// A one-off custom item, carrying its display name.
    Custom(String),
}

impl ArticleRef {
    /// Convenience constructor for a catalog reference.
    pub fn catalog(id: impl Into<String>) -> Self {
        ArticleRef::Catalog(id.into())
    }

    /// Convenience constructor for a custom item.
    pub fn custom(name: impl Into<String>) -> Self {
        ArticleRef::Custom(name.into())
    }

    /// Returns the custom name, if this is a custom item.
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            ArticleRef::Custom(name) => Some(name),
            ArticleRef::Catalog(_) => None,
        }
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement state of a payable/receivable record.
///
/// ## Derived, Never Stored
/// Status is a pure function of `(amount_paid, total)`. It is computed by
/// [`PaymentStatus::from_amounts`] at every site that needs it - the record
/// model does not carry a status field, so stored truth and displayed truth
/// cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    /// Fully settled: `amount_paid >= total`.
    Paid,
    /// Some payment received: `0 < amount_paid < total`.
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    /// Nothing paid yet.
    Due,
}

impl PaymentStatus {
    /// The single status formula.
    ///
    /// ## Boundaries
    /// ```text
    /// paid = 0          → Due
    /// 0 < paid < total  → PartiallyPaid
    /// paid >= total     → Paid
    /// ```
    /// `paid > total` also maps to Paid, but the payment tracker rejects
    /// any application that would reach that state.
    pub fn from_amounts(paid: Money, total: Money) -> Self {
        if paid >= total {
            PaymentStatus::Paid
        } else if paid.is_positive() {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::Due
        }
    }
}

// =============================================================================
// Counterparty Side
// =============================================================================

/// Which side of the books an opening balance sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BalanceSide {
    /// Money owed to the factory (receivable).
    Customer,
    /// Money the factory owes (payable).
    Supplier,
}

// =============================================================================
// Worker Payment Kind
// =============================================================================

/// Whether a worker payout settles earned wages or is an advance.
///
/// Both reduce the worker's balance identically; the distinction is kept
/// for the activity history display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkerPaymentKind {
    /// Regular payment against earned wages.
    Payment,
    /// Advance given ahead of production.
    Advance,
}

// =============================================================================
// Worker
// =============================================================================

/// A factory worker on the payroll roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Worker {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact number, if known.
    pub phone: Option<String>,
    /// Date the worker joined.
    #[ts(as = "String")]
    pub joining_date: NaiveDate,
    /// Whether the worker is currently active.
    pub is_active: bool,
}

impl Worker {
    /// Creates a new active worker with a generated id.
    pub fn new(name: impl Into<String>, phone: Option<String>, joining_date: NaiveDate) -> Self {
        Worker {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            phone,
            joining_date,
            is_active: true,
        }
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive calendar-day range used to window reports and ledgers.
///
/// Records are day-granular; a record dated exactly on `start` or `end` is
/// inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    #[ts(as = "String")]
    pub start: NaiveDate,
    #[ts(as = "String")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range spanning `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// A range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange { start: day, end: day }
    }

    /// Inclusive membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_status_boundaries() {
        let total = Money::from_rupees(100);

        assert_eq!(PaymentStatus::from_amounts(Money::zero(), total), PaymentStatus::Due);
        assert_eq!(
            PaymentStatus::from_amounts(Money::from_rupees(1), total),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(
            PaymentStatus::from_amounts(Money::from_rupees(99), total),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(PaymentStatus::from_amounts(total, total), PaymentStatus::Paid);
        // Unreachable via the tracker, but the formula is still total
        assert_eq!(
            PaymentStatus::from_amounts(Money::from_rupees(101), total),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_status_serde_labels() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"Paid\"");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::PartiallyPaid).unwrap(),
            "\"Partially Paid\""
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Due).unwrap(), "\"Due\"");
    }

    #[test]
    fn test_article_ref_as_key() {
        use std::collections::HashMap;

        let mut map: HashMap<ArticleRef, i64> = HashMap::new();
        map.insert(ArticleRef::catalog("k6"), 10);
        map.insert(ArticleRef::custom("Garden Bench"), 2);

        assert_eq!(map.get(&ArticleRef::catalog("k6")), Some(&10));
        assert_eq!(map.get(&ArticleRef::custom("Garden Bench")), Some(&2));
        // A custom item never collides with a catalog id of the same text
        assert_eq!(map.get(&ArticleRef::catalog("Garden Bench")), None);
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange::new(day("2026-08-01"), day("2026-08-31"));

        assert!(range.contains(day("2026-08-01")));
        assert!(range.contains(day("2026-08-31")));
        assert!(range.contains(day("2026-08-15")));
        assert!(!range.contains(day("2026-07-31")));
        assert!(!range.contains(day("2026-09-01")));
    }

    #[test]
    fn test_worker_new_defaults() {
        let w = Worker::new("Akbar", None, day("2026-01-05"));
        assert!(w.is_active);
        assert!(!w.id.is_empty());
    }
}
