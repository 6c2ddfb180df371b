//! Utility functions for common operations.

/// Format an amount of money with two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Step a slider value by `delta`, clamped to `0..=max`
pub fn step_clamped(value: u8, delta: i16, max: u8) -> u8 {
    let stepped = i16::from(value).saturating_add(delta);
    stepped.clamp(0, i16::from(max)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_whole() {
        assert_eq!(format_amount(57.5), "$57.50");
    }

    #[test]
    fn test_format_amount_zero() {
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(10.0 / 3.0), "$3.33");
        assert_eq!(format_amount(2.0 / 3.0), "$0.67");
    }

    #[test]
    fn test_step_clamped_within_range() {
        assert_eq!(step_clamped(15, 5, 80), 20);
        assert_eq!(step_clamped(15, -1, 80), 14);
    }

    #[test]
    fn test_step_clamped_at_bounds() {
        assert_eq!(step_clamped(2, -5, 80), 0);
        assert_eq!(step_clamped(78, 5, 80), 80);
        assert_eq!(step_clamped(80, i16::MAX, 80), 80);
    }
}
