//! # Derivation Engine
//!
//! Pure functions that fold the flat record log into the views the
//! presentation layer renders. Stateless: every function is recomputed in
//! full on each call from `(records, catalog, optional date range)` - there
//! is no incremental maintenance and no cache, so there is no staleness
//! window, at the cost of O(records) work per read.
//!
//! ## The Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Derivation Engine                                │
//! │                                                                         │
//! │   record log ──┬──► inventory_snapshot   per-article stock levels      │
//! │   (append-only)├──► production_report    qty + labor cost by category  │
//! │                ├──► ledger               customers/suppliers/unified   │
//! │                ├──► worker_balances      earned − paid per worker      │
//! │                ├──► worker_history       one worker's activity         │
//! │                ├──► daily_stats          today's dashboard numbers     │
//! │                └──► sales_export_rows    tabular dump for the exporter │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every fold matches the [`Record`] enum exhaustively; a new record
//! variant fails to compile until each view decides how to treat it.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::record::Record;
use crate::types::{ArticleCategory, ArticleRef, BalanceSide, DateRange, PaymentStatus, Worker};

// =============================================================================
// Inventory Snapshot
// =============================================================================

/// Stock level for one stock-keeping key.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct StockLevel {
    /// The stock-keeping key itself.
    pub article: ArticleRef,
    pub name: String,
    pub unit: String,
    pub category: ArticleCategory,
    /// May be negative if sales outran recorded production.
    pub quantity: i64,
}

/// Derives current stock levels from the full record log.
///
/// ## Accumulation Rules
/// - `+quantity`: InitialStock, Manufacturing, Purchase
/// - `−quantity`: Sale
/// - excluded entirely: Expense, InitialBalance, WorkerPayment
///
/// Every catalog article is seeded at zero so known articles appear even
/// with no records; custom keys are created lazily on first encounter.
/// Records referencing a catalog id the catalog doesn't know are skipped,
/// never counted and never a panic.
pub fn inventory_snapshot(records: &[Record], catalog: &Catalog) -> Vec<StockLevel> {
    let mut levels: Vec<StockLevel> = Vec::with_capacity(catalog.articles().len());
    let mut index: HashMap<ArticleRef, usize> = HashMap::new();

    // Seed every known article at zero, in catalog order.
    for article in catalog.articles() {
        let key = ArticleRef::catalog(&article.id);
        index.insert(key.clone(), levels.len());
        levels.push(StockLevel {
            article: key,
            name: article.name.clone(),
            unit: article.unit.clone(),
            category: article.category,
            quantity: 0,
        });
    }

    for record in records {
        let (article, delta) = match record {
            Record::InitialStock(r) => (&r.article, r.quantity),
            Record::Manufacturing(r) => (&r.article, r.quantity),
            Record::Purchase(r) => (&r.article, r.quantity),
            Record::Sale(r) => (&r.article, -r.quantity),
            // These never touch inventory.
            Record::Expense(_) | Record::InitialBalance(_) | Record::WorkerPayment(_) => continue,
        };

        let slot = match index.get(article) {
            Some(&i) => i,
            None => {
                // Lazily create the key - custom items land here. An
                // unknown catalog id resolves to None and is skipped.
                let Some(resolved) = catalog.resolve(article) else {
                    continue;
                };
                let i = levels.len();
                index.insert(article.clone(), i);
                levels.push(StockLevel {
                    article: article.clone(),
                    name: resolved.name,
                    unit: resolved.unit,
                    category: resolved.category,
                    quantity: 0,
                });
                i
            }
        };

        levels[slot].quantity += delta;
    }

    levels
}

// =============================================================================
// Production Report
// =============================================================================

/// Summed production for one article (or custom item) within a category.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ProductionGroup {
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub labor_cost: Money,
}

/// One category's production within the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CategoryProduction {
    pub category: ArticleCategory,
    pub groups: Vec<ProductionGroup>,
    pub total_quantity: i64,
    pub total_labor_cost: Money,
}

/// Rolls up Manufacturing records within an inclusive date window, grouped
/// by `(category, display name)`, summing quantity and labor cost.
///
/// A custom item's name is the grouping key within its category; records
/// with an unknown catalog id are skipped. Categories come back in
/// [`ArticleCategory`] order, groups in first-encounter order.
pub fn production_report(
    records: &[Record],
    catalog: &Catalog,
    range: DateRange,
) -> Vec<CategoryProduction> {
    // Category → (group name → slot) with stable group ordering.
    let mut categories: std::collections::BTreeMap<ArticleCategory, Vec<ProductionGroup>> =
        std::collections::BTreeMap::new();
    let mut slots: HashMap<(ArticleCategory, String), usize> = HashMap::new();

    for record in records {
        let Record::Manufacturing(r) = record else {
            continue;
        };
        if !range.contains(r.date) {
            continue;
        }
        let Some(resolved) = catalog.resolve(&r.article) else {
            continue;
        };

        let key = (resolved.category, resolved.name.clone());
        let groups = categories.entry(resolved.category).or_default();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(ProductionGroup {
                name: resolved.name,
                unit: resolved.unit,
                quantity: 0,
                labor_cost: Money::zero(),
            });
            groups.len() - 1
        });

        groups[slot].quantity += r.quantity;
        groups[slot].labor_cost += r.total_cost;
    }

    categories
        .into_iter()
        .map(|(category, groups)| CategoryProduction {
            category,
            total_quantity: groups.iter().map(|g| g.quantity).sum(),
            total_labor_cost: groups.iter().map(|g| g.labor_cost).sum(),
            groups,
        })
        .collect()
}

// =============================================================================
// Ledger Views
// =============================================================================

/// Which counterparty class a ledger covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum LedgerView {
    /// Sales plus customer-side opening balances.
    Customers,
    /// Purchases plus supplier-side opening balances.
    Suppliers,
    /// Everything money-related: sales, purchases, expenses, opening
    /// balances, worker payments.
    Unified,
}

/// One ledger row: a record plus its lazily computed outstanding balance.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry<'a> {
    pub record: &'a Record,
    /// `gross_amount − amount_paid` at derivation time. Never stored.
    pub balance: Money,
}

/// Projects the record log into one of the three ledger views, optionally
/// windowed by an inclusive date range.
///
/// Entries keep the log's order (most-recent-first). The three views
/// partition cleanly: a sale never shows up in the supplier ledger and
/// vice versa, and the unified view is the union of all five money-moving
/// types with no duplicates.
pub fn ledger<'a>(
    records: &'a [Record],
    view: LedgerView,
    range: Option<DateRange>,
) -> Vec<LedgerEntry<'a>> {
    records
        .iter()
        .filter(|record| match view {
            LedgerView::Customers => matches!(
                record,
                Record::Sale(_)
                    | Record::InitialBalance(crate::record::InitialBalanceRecord {
                        balance_type: BalanceSide::Customer,
                        ..
                    })
            ),
            LedgerView::Suppliers => matches!(
                record,
                Record::Purchase(_)
                    | Record::InitialBalance(crate::record::InitialBalanceRecord {
                        balance_type: BalanceSide::Supplier,
                        ..
                    })
            ),
            LedgerView::Unified => matches!(
                record,
                Record::Sale(_)
                    | Record::Purchase(_)
                    | Record::Expense(_)
                    | Record::InitialBalance(_)
                    | Record::WorkerPayment(_)
            ),
        })
        .filter(|record| range.map_or(true, |r| r.contains(record.date())))
        .map(|record| LedgerEntry {
            record,
            balance: record.outstanding_balance(),
        })
        .collect()
}

// =============================================================================
// Worker Balances
// =============================================================================

/// Payroll position for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct WorkerBalance {
    pub worker: Worker,
    /// Σ total_cost over Manufacturing records naming this worker.
    pub earned: Money,
    /// Σ amount over WorkerPayment records naming this worker.
    pub paid: Money,
    /// `earned − paid`. Negative means an advance outran earnings - a
    /// valid state, not an error.
    pub balance: Money,
}

/// Derives each worker's earned/paid/balance from the record log.
pub fn worker_balances(workers: &[Worker], records: &[Record]) -> Vec<WorkerBalance> {
    workers
        .iter()
        .map(|worker| {
            let earned: Money = records
                .iter()
                .filter_map(|record| match record {
                    Record::Manufacturing(r) if r.worker_id.as_deref() == Some(worker.id.as_str()) => {
                        Some(r.total_cost)
                    }
                    _ => None,
                })
                .sum();
            let paid: Money = records
                .iter()
                .filter_map(|record| match record {
                    Record::WorkerPayment(r) if r.worker_id == worker.id => Some(r.amount),
                    _ => None,
                })
                .sum();

            WorkerBalance {
                worker: worker.clone(),
                earned,
                paid,
                balance: earned - paid,
            }
        })
        .collect()
}

/// One worker's activity: their Manufacturing and WorkerPayment records,
/// newest first. Historical records survive worker removal, so this works
/// for departed workers too.
pub fn worker_history<'a>(records: &'a [Record], worker_id: &str) -> Vec<&'a Record> {
    let mut history: Vec<&Record> = records
        .iter()
        .filter(|record| {
            matches!(record, Record::Manufacturing(_) | Record::WorkerPayment(_))
                && record.worker_id() == Some(worker_id)
        })
        .collect();
    history.sort_by(|a, b| b.date().cmp(&a.date()));
    history
}

// =============================================================================
// Daily Dashboard Stats
// =============================================================================

/// The dashboard's headline numbers for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DailyStats {
    /// Total Manufacturing quantity dated today.
    pub produced_quantity: i64,
    /// Total Sale gross amount dated today.
    pub sales_revenue: Money,
    /// Everything money-moving that is not a sale: expenses, purchases,
    /// worker payments, opening balances booked today.
    pub cash_outflow: Money,
    /// Raw count of today's records.
    pub record_count: usize,
}

/// Aggregates the records dated exactly `today`.
///
/// The clock stays outside the core: callers pass the current date in.
pub fn daily_stats(records: &[Record], today: NaiveDate) -> DailyStats {
    let mut stats = DailyStats {
        produced_quantity: 0,
        sales_revenue: Money::zero(),
        cash_outflow: Money::zero(),
        record_count: 0,
    };

    for record in records.iter().filter(|r| r.date() == today) {
        stats.record_count += 1;
        match record {
            Record::Manufacturing(r) => {
                stats.produced_quantity += r.quantity;
                stats.cash_outflow += r.total_cost;
            }
            Record::Sale(r) => stats.sales_revenue += r.total_amount,
            Record::Purchase(_)
            | Record::Expense(_)
            | Record::InitialStock(_)
            | Record::InitialBalance(_)
            | Record::WorkerPayment(_) => stats.cash_outflow += record.gross_amount(),
        }
    }

    stats
}

// =============================================================================
// Sales Export
// =============================================================================

/// One row of the external spreadsheet export: sales only, with the
/// columns the exporter writes verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SalesExportRow {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub customer: String,
    pub article: String,
    pub quantity: i64,
    pub total: Money,
    pub paid: Money,
    pub status: PaymentStatus,
    /// Empty string when no phone is on file (the sheet wants a cell).
    pub phone: String,
}

/// Derives the tabular sales dump consumed by the spreadsheet exporter.
/// A derived read like any other - the exporter itself lives outside the
/// core.
pub fn sales_export_rows(records: &[Record], catalog: &Catalog) -> Vec<SalesExportRow> {
    records
        .iter()
        .filter_map(|record| match record {
            Record::Sale(r) => Some(SalesExportRow {
                date: r.date,
                customer: r.customer.clone(),
                article: catalog.display_name(&r.article),
                quantity: r.quantity,
                total: r.total_amount,
                paid: r.amount_paid,
                status: PaymentStatus::from_amounts(r.amount_paid, r.total_amount),
                phone: r.phone.clone().unwrap_or_default(),
            }),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
