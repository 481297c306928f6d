//! Numeric helpers for display rounding and export formatting.

/// Rounds `value` to `decimals` places after the point.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Scientific notation with `digits` fraction digits and a signed exponent,
/// e.g. `1.672600e-27` or `3.150000e+0`.
pub fn format_exponential(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let formatted = format!("{value:.digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_display_precision() {
        assert_eq!(round_to(15.245_234, 3), 15.245);
        assert_eq!(round_to(65.589_6, 2), 65.59);
    }

    #[test]
    fn exponent_always_carries_a_sign() {
        assert_eq!(format_exponential(3.15, 6), "3.150000e+0");
        assert_eq!(format_exponential(1.6726e-27, 6), "1.672600e-27");
        assert_eq!(format_exponential(0.0, 6), "0.000000e+0");
        assert_eq!(format_exponential(-1234.5, 2), "-1.23e+3");
    }
}
