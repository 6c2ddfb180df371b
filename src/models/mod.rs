//! Data models for tipcalc
//!
//! This module contains the calculation core:
//! - Raw and validated input, with the validation step
//! - Tip computation and its result type
//! - The focusable field enum

pub mod enums;
pub mod input;
pub mod tip;

// Re-exports for convenient access
pub use enums::{Field, InputField};
pub use input::{RawInput, ValidatedInput};
pub use tip::{TipResult, DEFAULT_PERCENT, MAX_BILL, MAX_PERCENT};
