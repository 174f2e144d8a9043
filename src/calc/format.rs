//! Result formatting boundary.
//!
//! All stored state is canonical text; floating-point values exist only at
//! the instant an operation is applied. Results are rounded to 10 fractional
//! digits here so binary-float artifacts never reach the display.

/// Renders a result as a canonical numeric string: no decimal point for
/// integral values, at most 10 fractional digits otherwise, trailing zeros
/// stripped, negative zero normalized to `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let fixed = format!("{:.10}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_point() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(16.0), "16");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(1.2300000000001), "1.23");
    }

    #[test]
    fn test_float_artifacts_rounded_away() {
        // 0.1 + 0.2 is 0.30000000000000004 in binary
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
    }
}
