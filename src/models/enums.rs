//! Enums used throughout tipcalc
//!
//! This module contains the focusable fields of the calculator screen
//! and the subset of them that hold user-typed values.

use std::fmt;

/// Focusable input on the calculator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Bill, // Bill total text field
    Split,   // Party size text field
    Percent, // Tip percentage slider
}

impl Field {
    /// Next field in Tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Field::Bill => Field::Split,
            Field::Split => Field::Percent,
            Field::Percent => Field::Bill,
        }
    }

    /// Previous field in Tab order (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Field::Bill => Field::Percent,
            Field::Split => Field::Bill,
            Field::Percent => Field::Split,
        }
    }

    /// Short tag used in errors and logs
    pub fn tag(&self) -> &'static str {
        match self {
            Field::Bill => "bill",
            Field::Split => "split",
            Field::Percent => "percent",
        }
    }

    /// Whether the field takes free text
    pub fn is_text(&self) -> bool {
        matches!(self, Field::Bill | Field::Split)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Text field whose value can be rejected by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Bill,
    Split,
}

impl InputField {
    pub fn tag(&self) -> &'static str {
        Field::from(*self).tag()
    }
}

impl From<InputField> for Field {
    fn from(field: InputField) -> Self {
        match field {
            InputField::Bill => Field::Bill,
            InputField::Split => Field::Split,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_next_cycles() {
        assert_eq!(Field::Bill.next(), Field::Split);
        assert_eq!(Field::Split.next(), Field::Percent);
        assert_eq!(Field::Percent.next(), Field::Bill);
    }

    #[test]
    fn test_field_prev_undoes_next() {
        for field in [Field::Bill, Field::Split, Field::Percent] {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_field_tag() {
        assert_eq!(Field::Split.tag(), "split");
        assert_eq!(Field::Bill.to_string(), "bill");
    }

    #[test]
    fn test_field_default() {
        assert_eq!(Field::default(), Field::Bill);
        assert!(Field::default().is_text());
        assert!(!Field::Percent.is_text());
    }

    #[test]
    fn test_input_field_maps_to_screen_field() {
        assert_eq!(Field::from(InputField::Bill), Field::Bill);
        assert_eq!(Field::from(InputField::Split), Field::Split);
        assert_eq!(InputField::Split.to_string(), "split");
    }
}
