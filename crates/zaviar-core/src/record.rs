//! # Record Model
//!
//! The central entity of Zaviar Books: one `Record` per atomic business
//! event, stored most-recent-first in an append/delete-only log.
//!
//! ## The Seven Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Record                                        │
//! │                                                                         │
//! │  Manufacturing   production event; +inventory, labor owed to worker    │
//! │  Sale            -inventory, creates a receivable                      │
//! │  Purchase        +inventory, creates a payable                         │
//! │  Expense         pure cash outflow, never touches inventory            │
//! │  InitialStock    one-time inventory seed                               │
//! │  InitialBalance  one-time receivable/payable seed (no article)         │
//! │  WorkerPayment   cash outflow reducing a worker's balance              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! Records are immutable after construction with ONE exception: the payment
//! tracker may increment `amount_paid` on Sale/Purchase records. Totals are
//! computed by the constructors (`quantity × unit rate`) and never accepted
//! from callers, and payment status is derived on demand - see
//! [`crate::payment`].
//!
//! ## Why Exhaustive Matching
//! The derivation engine matches on every variant. Adding an eighth record
//! type fails to compile until every fold handles it - loose field probing
//! (`totalAmount || totalCost || amount`) would give no such guarantee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ArticleRef, BalanceSide, PaymentStatus, WorkerPaymentKind};
use crate::validation::{validate_amount, validate_name, validate_quantity};

// =============================================================================
// Variant Payloads
// =============================================================================

/// A production event. Increases inventory and accrues a labor-cost
/// liability toward the worker who produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ManufacturingRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub article: ArticleRef,
    pub quantity: i64,
    /// Labor rate per item.
    pub unit_cost: Money,
    /// Always `quantity × unit_cost`; set by the constructor.
    pub total_cost: Money,
    /// Worker who produced the batch, if tracked.
    pub worker_id: Option<String>,
    pub notes: Option<String>,
}

/// A sale. Decreases inventory and creates a receivable from the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub article: ArticleRef,
    pub quantity: i64,
    pub unit_price: Money,
    /// Always `quantity × unit_price`; set by the constructor.
    pub total_amount: Money,
    /// Monotonically non-decreasing; only the payment tracker touches it.
    pub amount_paid: Money,
    pub customer: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// A purchase. Increases inventory and creates a payable to the supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PurchaseRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub article: ArticleRef,
    pub quantity: i64,
    pub unit_cost: Money,
    /// Always `quantity × unit_cost`; set by the constructor.
    pub total_amount: Money,
    /// Monotonically non-decreasing; only the payment tracker touches it.
    pub amount_paid: Money,
    pub supplier: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// A cash expense. Never touches inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExpenseRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub notes: Option<String>,
}

/// A one-time inventory seed entered when the books were opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InitialStockRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub article: ArticleRef,
    pub quantity: i64,
    pub notes: Option<String>,
}

/// A one-time receivable/payable seed, not tied to any article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InitialBalanceRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Counterparty name.
    pub name: String,
    pub amount: Money,
    pub balance_type: BalanceSide,
    pub notes: Option<String>,
}

/// A payout to a worker, reducing their balance. May overdraw it
/// (advances) - a negative worker balance is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WorkerPaymentRecord {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub worker_id: String,
    pub amount: Money,
    pub payment_type: WorkerPaymentKind,
    pub notes: Option<String>,
}

// =============================================================================
// Record (tagged union)
// =============================================================================

/// One atomic business event.
///
/// Serialized with an internal `type` tag, so the persisted JSON log is a
/// flat array of self-describing objects:
/// `{"type":"SALE","id":"…","date":"2026-08-25",…}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Record {
    Manufacturing(ManufacturingRecord),
    Sale(SaleRecord),
    Purchase(PurchaseRecord),
    Expense(ExpenseRecord),
    InitialStock(InitialStockRecord),
    InitialBalance(InitialBalanceRecord),
    WorkerPayment(WorkerPaymentRecord),
}

// =============================================================================
// Constructors
// =============================================================================
// Every constructor validates its inputs and computes derived totals.
// A rejected input never becomes a record.

fn generate_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trims a custom item name, rejecting empty ones. Catalog refs pass
/// through untouched.
fn validate_article(article: ArticleRef) -> Result<ArticleRef, ValidationError> {
    match article {
        ArticleRef::Custom(name) => Ok(ArticleRef::Custom(validate_name("custom item name", &name)?)),
        catalog @ ArticleRef::Catalog(_) => Ok(catalog),
    }
}

impl ManufacturingRecord {
    pub fn new(
        date: NaiveDate,
        article: ArticleRef,
        quantity: i64,
        unit_cost: Money,
        worker_id: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;
        validate_amount("unit cost", unit_cost)?;
        let article = validate_article(article)?;

        Ok(ManufacturingRecord {
            id: generate_record_id(),
            date,
            article,
            quantity,
            unit_cost,
            total_cost: unit_cost.multiply_quantity(quantity),
            worker_id,
            notes,
        })
    }
}

impl SaleRecord {
    pub fn new(
        date: NaiveDate,
        article: ArticleRef,
        quantity: i64,
        unit_price: Money,
        customer: &str,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;
        validate_amount("unit price", unit_price)?;
        let article = validate_article(article)?;
        let customer = validate_name("customer", customer)?;

        Ok(SaleRecord {
            id: generate_record_id(),
            date,
            article,
            quantity,
            unit_price,
            total_amount: unit_price.multiply_quantity(quantity),
            amount_paid: Money::zero(),
            customer,
            phone,
            notes,
        })
    }
}

impl PurchaseRecord {
    pub fn new(
        date: NaiveDate,
        article: ArticleRef,
        quantity: i64,
        unit_cost: Money,
        supplier: &str,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;
        validate_amount("unit cost", unit_cost)?;
        let article = validate_article(article)?;
        let supplier = validate_name("supplier", supplier)?;

        Ok(PurchaseRecord {
            id: generate_record_id(),
            date,
            article,
            quantity,
            unit_cost,
            total_amount: unit_cost.multiply_quantity(quantity),
            amount_paid: Money::zero(),
            supplier,
            phone,
            notes,
        })
    }
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        description: &str,
        amount: Money,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let description = validate_name("description", description)?;
        validate_amount("amount", amount)?;

        Ok(ExpenseRecord {
            id: generate_record_id(),
            date,
            description,
            amount,
            notes,
        })
    }
}

impl InitialStockRecord {
    pub fn new(
        date: NaiveDate,
        article: ArticleRef,
        quantity: i64,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;
        let article = validate_article(article)?;

        Ok(InitialStockRecord {
            id: generate_record_id(),
            date,
            article,
            quantity,
            notes,
        })
    }
}

impl InitialBalanceRecord {
    pub fn new(
        date: NaiveDate,
        name: &str,
        amount: Money,
        balance_type: BalanceSide,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name("name", name)?;
        validate_amount("amount", amount)?;

        Ok(InitialBalanceRecord {
            id: generate_record_id(),
            date,
            name,
            amount,
            balance_type,
            notes,
        })
    }
}

impl WorkerPaymentRecord {
    pub fn new(
        date: NaiveDate,
        worker_id: &str,
        amount: Money,
        payment_type: WorkerPaymentKind,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let worker_id = validate_name("worker id", worker_id)?;
        validate_amount("amount", amount)?;

        Ok(WorkerPaymentRecord {
            id: generate_record_id(),
            date,
            worker_id,
            amount,
            payment_type,
            notes,
        })
    }
}

// Wrapping conversions so call sites read `store.append(sale.into())`.
impl From<ManufacturingRecord> for Record {
    fn from(r: ManufacturingRecord) -> Self {
        Record::Manufacturing(r)
    }
}
impl From<SaleRecord> for Record {
    fn from(r: SaleRecord) -> Self {
        Record::Sale(r)
    }
}
impl From<PurchaseRecord> for Record {
    fn from(r: PurchaseRecord) -> Self {
        Record::Purchase(r)
    }
}
impl From<ExpenseRecord> for Record {
    fn from(r: ExpenseRecord) -> Self {
        Record::Expense(r)
    }
}
impl From<InitialStockRecord> for Record {
    fn from(r: InitialStockRecord) -> Self {
        Record::InitialStock(r)
    }
}
impl From<InitialBalanceRecord> for Record {
    fn from(r: InitialBalanceRecord) -> Self {
        Record::InitialBalance(r)
    }
}
impl From<WorkerPaymentRecord> for Record {
    fn from(r: WorkerPaymentRecord) -> Self {
        Record::WorkerPayment(r)
    }
}

// =============================================================================
// Shared Accessors
// =============================================================================

impl Record {
    /// Opaque unique identifier, client-generated, never reused.
    pub fn id(&self) -> &str {
        match self {
            Record::Manufacturing(r) => &r.id,
            Record::Sale(r) => &r.id,
            Record::Purchase(r) => &r.id,
            Record::Expense(r) => &r.id,
            Record::InitialStock(r) => &r.id,
            Record::InitialBalance(r) => &r.id,
            Record::WorkerPayment(r) => &r.id,
        }
    }

    /// Calendar date of the event (day-granular).
    pub fn date(&self) -> NaiveDate {
        match self {
            Record::Manufacturing(r) => r.date,
            Record::Sale(r) => r.date,
            Record::Purchase(r) => r.date,
            Record::Expense(r) => r.date,
            Record::InitialStock(r) => r.date,
            Record::InitialBalance(r) => r.date,
            Record::WorkerPayment(r) => r.date,
        }
    }

    /// Free-form notes, if any.
    pub fn notes(&self) -> Option<&str> {
        match self {
            Record::Manufacturing(r) => r.notes.as_deref(),
            Record::Sale(r) => r.notes.as_deref(),
            Record::Purchase(r) => r.notes.as_deref(),
            Record::Expense(r) => r.notes.as_deref(),
            Record::InitialStock(r) => r.notes.as_deref(),
            Record::InitialBalance(r) => r.notes.as_deref(),
            Record::WorkerPayment(r) => r.notes.as_deref(),
        }
    }

    /// The article this record concerns, for the four variants that move
    /// stock. Expense, opening balances, and worker payments have none.
    pub fn article(&self) -> Option<&ArticleRef> {
        match self {
            Record::Manufacturing(r) => Some(&r.article),
            Record::Sale(r) => Some(&r.article),
            Record::Purchase(r) => Some(&r.article),
            Record::InitialStock(r) => Some(&r.article),
            Record::Expense(_) | Record::InitialBalance(_) | Record::WorkerPayment(_) => None,
        }
    }

    /// Item quantity, where the variant carries one.
    pub fn quantity(&self) -> Option<i64> {
        match self {
            Record::Manufacturing(r) => Some(r.quantity),
            Record::Sale(r) => Some(r.quantity),
            Record::Purchase(r) => Some(r.quantity),
            Record::InitialStock(r) => Some(r.quantity),
            Record::Expense(_) | Record::InitialBalance(_) | Record::WorkerPayment(_) => None,
        }
    }

    /// The "amount-like" value of this record: total cost for production,
    /// total amount for sales/purchases, plain amount for the rest.
    ///
    /// Callers go through this named accessor instead of probing fields -
    /// a new variant fails to compile until it answers the question.
    pub fn gross_amount(&self) -> Money {
        match self {
            Record::Manufacturing(r) => r.total_cost,
            Record::Sale(r) => r.total_amount,
            Record::Purchase(r) => r.total_amount,
            Record::Expense(r) => r.amount,
            Record::InitialStock(_) => Money::zero(),
            Record::InitialBalance(r) => r.amount,
            Record::WorkerPayment(r) => r.amount,
        }
    }

    /// Amount settled so far. Zero for variants that carry no receivable
    /// or payable.
    pub fn amount_paid(&self) -> Money {
        match self {
            Record::Sale(r) => r.amount_paid,
            Record::Purchase(r) => r.amount_paid,
            Record::Manufacturing(_)
            | Record::Expense(_)
            | Record::InitialStock(_)
            | Record::InitialBalance(_)
            | Record::WorkerPayment(_) => Money::zero(),
        }
    }

    /// Outstanding balance: `gross_amount − amount_paid`. Computed lazily,
    /// never stored.
    pub fn outstanding_balance(&self) -> Money {
        self.gross_amount() - self.amount_paid()
    }

    /// Derived settlement status for payable/receivable records; `None`
    /// for variants that aren't tracked against a total.
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        match self {
            Record::Sale(r) => Some(PaymentStatus::from_amounts(r.amount_paid, r.total_amount)),
            Record::Purchase(r) => Some(PaymentStatus::from_amounts(r.amount_paid, r.total_amount)),
            _ => None,
        }
    }

    /// The counterparty name: customer, supplier, or opening-balance party.
    pub fn counterparty(&self) -> Option<&str> {
        match self {
            Record::Sale(r) => Some(&r.customer),
            Record::Purchase(r) => Some(&r.supplier),
            Record::InitialBalance(r) => Some(&r.name),
            _ => None,
        }
    }

    /// The worker this record concerns, if any.
    pub fn worker_id(&self) -> Option<&str> {
        match self {
            Record::Manufacturing(r) => r.worker_id.as_deref(),
            Record::WorkerPayment(r) => Some(&r.worker_id),
            _ => None,
        }
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
    fn test_constructor_computes_total() {
        let rec = ManufacturingRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("k6"),
            120,
            Money::from_rupees(45),
            None,
            None,
        )
        .unwrap();

        assert_eq!(rec.total_cost, Money::from_rupees(5400));
    }

    #[test]
    fn test_sale_starts_unpaid() {
        let sale = SaleRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("rt"),
            30,
            Money::from_rupees(90),
            "Haji Traders",
            None,
            None,
        )
        .unwrap();

        assert_eq!(sale.total_amount, Money::from_rupees(2700));
        assert_eq!(sale.amount_paid, Money::zero());

        let rec: Record = sale.into();
        assert_eq!(rec.payment_status(), Some(PaymentStatus::Due));
        assert_eq!(rec.outstanding_balance(), Money::from_rupees(2700));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(SaleRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("rt"),
            0, // zero quantity
            Money::from_rupees(90),
            "Haji Traders",
            None,
            None,
        )
        .is_err());

        assert!(SaleRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("rt"),
            30,
            Money::from_rupees(90),
            "   ", // missing customer
            None,
            None,
        )
        .is_err());

        assert!(ExpenseRecord::new(day("2026-08-25"), "Diesel", Money::zero(), None).is_err());

        // A custom item needs a real name
        assert!(InitialStockRecord::new(day("2026-08-25"), ArticleRef::custom(""), 5, None).is_err());
    }

    #[test]
    fn test_serde_type_tag() {
        let rec: Record = WorkerPaymentRecord::new(
            day("2026-08-25"),
            "w1",
            Money::from_rupees(2000),
            WorkerPaymentKind::Advance,
            None,
        )
        .unwrap()
        .into();

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "WORKER_PAYMENT");
        assert_eq!(json["paymentType"], "Advance");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_gross_amount_per_variant() {
        let stock: Record = InitialStockRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("k6"),
            100,
            None,
        )
        .unwrap()
        .into();
        // Opening stock carries quantity, not money
        assert_eq!(stock.gross_amount(), Money::zero());

        let expense: Record =
            ExpenseRecord::new(day("2026-08-25"), "Diesel", Money::from_rupees(1500), None)
                .unwrap()
                .into();
        assert_eq!(expense.gross_amount(), Money::from_rupees(1500));
        assert_eq!(expense.payment_status(), None);
    }

    #[test]
    fn test_custom_name_trimmed() {
        let rec = InitialStockRecord::new(
            day("2026-08-25"),
            ArticleRef::custom("  Garden Bench "),
            5,
            None,
        )
        .unwrap();
        assert_eq!(rec.article, ArticleRef::custom("Garden Bench"));
    }
}
