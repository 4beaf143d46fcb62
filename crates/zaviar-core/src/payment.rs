//! # Payment Tracker
//!
//! Incremental payment application over payable/receivable records.
//!
//! ## The Only Allowed Mutation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply_payment(record, amount)                                          │
//! │                                                                         │
//! │  Sale/Purchase?  ──no──► Ok (no-op; other variants carry no payable)   │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  amount > 0?     ──no──► Err(InvalidPaymentAmount), record untouched   │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  paid + amount <= total? ──no──► Err(Overpayment), record untouched    │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  amount_paid += amount   (status is derived, nothing else to update)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `amount_paid` is therefore monotonically non-decreasing and can never
//! exceed the record's total. The forms never set status themselves; they
//! read it back through [`Record::payment_status`].

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::record::Record;

/// Applies an additional payment to a Sale or Purchase record.
///
/// ## Arguments
/// * `record` - the record to settle against
/// * `amount` - the additional amount received/paid out
///
/// ## Returns
/// * `Ok(())` - payment applied, or the record type carries no payable
///   (no-op by design)
/// * `Err(CoreError::InvalidPaymentAmount)` - non-positive amount
/// * `Err(CoreError::Overpayment)` - would drive `amount_paid` above total
///
/// On any error the record is left exactly as it was.
pub fn apply_payment(record: &mut Record, amount: Money) -> CoreResult<()> {
    // Only sales and purchases track settlement. Requests against any
    // other type are a no-op, not an error.
    let (paid, total) = match record {
        Record::Sale(r) => (&mut r.amount_paid, r.total_amount),
        Record::Purchase(r) => (&mut r.amount_paid, r.total_amount),
        _ => return Ok(()),
    };

    if !amount.is_positive() {
        return Err(CoreError::InvalidPaymentAmount {
            reason: format!("{amount} is not a positive amount"),
        });
    }

    let outstanding = total - *paid;
    if amount > outstanding {
        return Err(CoreError::Overpayment {
            outstanding,
            requested: amount,
        });
    }

    *paid += amount;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ExpenseRecord, SaleRecord};
    use crate::types::{ArticleRef, PaymentStatus};
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sale_of(total_rupees: i64) -> Record {
        SaleRecord::new(
            day("2026-08-25"),
            ArticleRef::catalog("rt"),
            1,
            Money::from_rupees(total_rupees),
            "Haji Traders",
            None,
            None,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_payment_walks_through_statuses() {
        let mut rec = sale_of(1000);
        assert_eq!(rec.payment_status(), Some(PaymentStatus::Due));

        apply_payment(&mut rec, Money::from_rupees(400)).unwrap();
        assert_eq!(rec.payment_status(), Some(PaymentStatus::PartiallyPaid));
        assert_eq!(rec.amount_paid(), Money::from_rupees(400));

        apply_payment(&mut rec, Money::from_rupees(600)).unwrap();
        assert_eq!(rec.payment_status(), Some(PaymentStatus::Paid));
        assert_eq!(rec.outstanding_balance(), Money::zero());
    }

    #[test]
    fn test_payments_accumulate_exactly() {
        let mut rec = sale_of(1000);
        let installments = [250, 250, 300, 200];

        for amount in installments {
            apply_payment(&mut rec, Money::from_rupees(amount)).unwrap();
        }

        let expected: Money = installments.iter().map(|r| Money::from_rupees(*r)).sum();
        assert_eq!(rec.amount_paid(), expected);
        assert_eq!(rec.payment_status(), Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_overpayment_rejected_record_untouched() {
        let mut rec = sale_of(1000);
        apply_payment(&mut rec, Money::from_rupees(900)).unwrap();

        let err = apply_payment(&mut rec, Money::from_rupees(200)).unwrap_err();
        assert!(matches!(err, CoreError::Overpayment { .. }));

        // Failed application leaves the record exactly as it was
        assert_eq!(rec.amount_paid(), Money::from_rupees(900));
        assert_eq!(rec.payment_status(), Some(PaymentStatus::PartiallyPaid));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut rec = sale_of(1000);

        assert!(matches!(
            apply_payment(&mut rec, Money::zero()),
            Err(CoreError::InvalidPaymentAmount { .. })
        ));
        assert!(matches!(
            apply_payment(&mut rec, Money::from_rupees(-50)),
            Err(CoreError::InvalidPaymentAmount { .. })
        ));
        assert_eq!(rec.amount_paid(), Money::zero());
    }

    #[test]
    fn test_exact_settlement_allowed() {
        let mut rec = sale_of(1000);
        apply_payment(&mut rec, Money::from_rupees(1000)).unwrap();
        assert_eq!(rec.payment_status(), Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_non_payable_is_noop() {
        let mut rec: Record =
            ExpenseRecord::new(day("2026-08-25"), "Diesel", Money::from_rupees(1500), None)
                .unwrap()
                .into();
        let before = rec.clone();

        apply_payment(&mut rec, Money::from_rupees(100)).unwrap();
        assert_eq!(rec, before);
    }
}
