//! Error types for tipcalc.
//!
//! - `InputError`: user input that cannot be used for a calculation
//! - `ConfigError`: problems loading the settings file
//!
//! Input errors never leave the calculate action; they are turned into
//! on-screen messages by the controller.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::InputField;

/// Why a calculation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The field text is not a well-formed number.
    #[error("{field} is not a valid number")]
    Parse { field: InputField },

    /// The field parsed but is out of range (zero, negative, or too large).
    #[error("{field} is out of range")]
    InvalidValue { field: InputField },
}

impl InputError {
    /// The field the error refers to
    pub fn field(&self) -> InputField {
        match self {
            InputError::Parse { field } | InputError::InvalidValue { field } => *field,
        }
    }
}

/// Settings file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("default_percent {0} is above the slider maximum of {max}", max = crate::models::MAX_PERCENT)]
    PercentOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_field() {
        assert_eq!(
            InputError::Parse {
                field: InputField::Bill
            }
            .field(),
            InputField::Bill
        );
        assert_eq!(
            InputError::InvalidValue {
                field: InputField::Split
            }
            .field(),
            InputField::Split
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::InvalidValue {
            field: InputField::Split,
        };
        assert_eq!(err.to_string(), "split is out of range");
        let err = InputError::Parse {
            field: InputField::Bill,
        };
        assert_eq!(err.to_string(), "bill is not a valid number");
    }

    #[test]
    fn test_percent_out_of_range_display() {
        let err = ConfigError::PercentOutOfRange(95);
        assert_eq!(
            err.to_string(),
            "default_percent 95 is above the slider maximum of 80"
        );
    }
}
