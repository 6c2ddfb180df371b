//! Input parsing and validation
//!
//! Raw field text is parsed first and range-checked second, so a
//! malformed number and an out-of-range one surface as different errors.

use tracing::{info, warn};

use crate::error::InputError;
use crate::models::{InputField, MAX_BILL};

/// Unparsed text from the bill and split fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput<'a> {
    pub bill: &'a str,
    pub split: &'a str,
}

/// Input that passed validation. Both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub bill_total: f64,
    pub party_size: u32,
}

impl<'a> RawInput<'a> {
    pub fn new(bill: &'a str, split: &'a str) -> Self {
        Self { bill, split }
    }

    /// Parse both fields, then check that both are in range.
    ///
    /// Split is checked before bill, so when both are out of range
    /// the split error wins.
    pub fn validate(&self) -> Result<ValidatedInput, InputError> {
        let split = parse_split(self.split)?;
        let bill = parse_bill(self.bill)?;

        if split <= 0 {
            info!(split, "rejected non-positive split");
            return Err(InputError::InvalidValue {
                field: InputField::Split,
            });
        }

        if bill <= 0.0 || bill > MAX_BILL {
            info!(bill, "rejected out-of-range bill total");
            return Err(InputError::InvalidValue {
                field: InputField::Bill,
            });
        }

        Ok(ValidatedInput {
            bill_total: bill,
            // split > 0 was checked above, so the cast cannot wrap
            party_size: split as u32,
        })
    }
}

/// Parse the party size as a signed 32-bit integer
fn parse_split(text: &str) -> Result<i32, InputError> {
    text.trim().parse::<i32>().map_err(|e| {
        warn!(text, error = %e, "split is not a valid integer");
        InputError::Parse {
            field: InputField::Split,
        }
    })
}

/// Parse the bill total as a finite float
fn parse_bill(text: &str) -> Result<f64, InputError> {
    let parse_error = || {
        warn!(text, "bill total is not a valid number");
        InputError::Parse {
            field: InputField::Bill,
        }
    };

    let value = text.trim().parse::<f64>().map_err(|_| parse_error())?;
    // "NaN" and "inf" parse as floats but are not amounts
    if !value.is_finite() {
        return Err(parse_error());
    }
    Ok(value)
}
