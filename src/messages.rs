//! User-facing strings.
//!
//! Every piece of text the calculator shows lives here so the screen
//! code only looks strings up.

use crate::cli::VERSION;
use crate::error::InputError;
use crate::models::{InputField, TipResult};
use crate::utils::format_amount;

/// Shown in the result panel before the first calculation
pub const INITIAL_PROMPT: &str = "Enter the bill total, split and percentage.";

/// Shown when either field is not a number
pub const TRY_AGAIN: &str = "Those numbers didn't work. Please try again.";

/// Advisory for a split of zero or less
pub const INVALID_SPLIT: &str = "The split must be at least one person.";

/// Advisory for a bill total out of range
pub const INVALID_BILL: &str = "The bill total must be more than zero and at most $1,000,000,000,000.";

/// Field-specific advisory for an out-of-range value
pub fn invalid_value(field: InputField) -> &'static str {
    match field {
        InputField::Split => INVALID_SPLIT,
        InputField::Bill => INVALID_BILL,
    }
}

/// One-line explanation for a rejected calculation
pub fn rejected(err: InputError) -> &'static str {
    match err {
        InputError::Parse { .. } => TRY_AGAIN,
        InputError::InvalidValue { field } => invalid_value(field),
    }
}

/// About text (replaces the result panel)
pub fn about() -> String {
    format!(
        "tipcalc {}\n\nWork out the tip on a bill and split it across the table.\n\
         Pick a percentage with the slider, enter the bill and party size, then press Enter.",
        VERSION
    )
}

/// Live label next to the slider
pub fn tip_percent_label(percent: u8) -> String {
    format!("Tip: {}%", percent)
}

/// One-person result: tip and total
pub fn result_singular(result: &TipResult) -> String {
    format!(
        "Tip: {}\nTotal: {}",
        format_amount(result.tip_amount),
        format_amount(result.total_amount)
    )
}

/// Split result: tip, total, and each person's share of both
pub fn result_plural(result: &TipResult, tip_each: f64, total_each: f64) -> String {
    format!(
        "Tip: {}\nTotal: {}\n\nSplit {} ways:\nTip each: {}\nTotal each: {}",
        format_amount(result.tip_amount),
        format_amount(result.total_amount),
        result.party_size,
        format_amount(tip_each),
        format_amount(total_each)
    )
}

/// Pick the singular or plural message for a result
pub fn result_message(result: &TipResult) -> String {
    match result.per_person {
        Some(share) => result_plural(result, share.tip, share.total),
        None => result_singular(result),
    }
}
