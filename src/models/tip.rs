//! Tip calculation
//!
//! All arithmetic is done in `f64`. The percentage is turned into a
//! fraction before it is applied to the bill.

use serde::Serialize;

use crate::models::ValidatedInput;

/// Default slider position
pub const DEFAULT_PERCENT: u8 = 15;

/// Upper bound of the slider (inclusive)
pub const MAX_PERCENT: u8 = 80;

/// Largest accepted bill total. Keeps every derived amount finite and
/// printable to the cent.
pub const MAX_BILL: f64 = 1e12;

/// Share of the tip and total for one member of the party
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerPerson {
    pub tip: f64,
    pub total: f64,
}

/// Outcome of a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipResult {
    pub bill_total: f64,
    pub tip_percent: u8,
    pub party_size: u32,
    pub tip_amount: f64,
    pub total_amount: f64,
    /// Present only when the party has more than one person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_person: Option<PerPerson>,
}

/// Tip owed on `bill_total` at `tip_percent`.
///
/// The slider's upper bound is not enforced here.
pub fn calculate_tip(bill_total: f64, tip_percent: u8) -> f64 {
    bill_total * (f64::from(tip_percent) / 100.0)
}

impl TipResult {
    pub fn compute(input: &ValidatedInput, tip_percent: u8) -> Self {
        let tip_amount = calculate_tip(input.bill_total, tip_percent);
        let total_amount = input.bill_total + tip_amount;

        let per_person = (input.party_size > 1).then(|| {
            let n = f64::from(input.party_size);
            PerPerson {
                tip: tip_amount / n,
                total: total_amount / n,
            }
        });

        Self {
            bill_total: input.bill_total,
            tip_percent,
            party_size: input.party_size,
            tip_amount,
            total_amount,
            per_person,
        }
    }
}
