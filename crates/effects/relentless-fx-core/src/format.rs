//! Number parsing and formatting for counter text.
//!
//! Grouping is fixed to en-US (`,` every three digits) so output does not depend on
//! the visitor's locale.

/// Parses the longest numeric prefix of `raw`, the way a browser `parseFloat` does:
/// leading whitespace is skipped and trailing garbage ignored (`"12k"` is 12).
/// Returns `None` when no digits lead the string.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Inserts `,` between every group of three digits of an unsigned digit string.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Floors `value` and renders it with thousands separators (`1000000` -> `"1,000,000"`).
pub fn format_grouped_integer(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    // `+ 0.0` folds -0 into 0.
    let floored = value.floor() + 0.0;
    let text = format!("{floored:.0}");
    match text.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&text),
    }
}

/// Renders `value` with exactly one fractional digit, rounding the exact binary value
/// like `toFixed(1)`: `0.35` (stored as 0.3499..) gives `"0.3"`, and exact ties such as
/// `0.25` go away from zero.
pub fn format_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    // `+ 0.0` folds -0 into 0.
    let value = value + 0.0;
    if is_tenths_tie(value) {
        // x = m/4 with m odd, so x * 10 is exact and `round` breaks the tie away from zero.
        let rounded = (value * 10.0).round() / 10.0;
        return format!("{rounded:.1}");
    }
    format!("{value:.1}")
}

/// True when `value` lies exactly halfway between two tenths. In binary that only
/// happens for odd multiples of 0.25.
fn is_tenths_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters.abs() < 9.0e15 && quarters % 2.0 != 0.0
}

/// Counter value text for either display mode.
pub fn format_counter_value(value: f64, decimal: bool) -> String {
    if decimal {
        format_one_decimal(value)
    } else {
        format_grouped_integer(value)
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(format_grouped_integer(0.0), "0");
        assert_eq!(format_grouped_integer(999.9), "999");
        assert_eq!(format_grouped_integer(1000.0), "1,000");
        assert_eq!(format_grouped_integer(1_000_000.0), "1,000,000");
        assert_eq!(format_grouped_integer(-1234.0), "-1,234");
        assert_eq!(format_grouped_integer(-0.2), "-1");
    }

    #[test]
    fn one_decimal() {
        assert_eq!(format_one_decimal(1234.5), "1234.5");
        assert_eq!(format_one_decimal(0.0), "0.0");
        assert_eq!(format_one_decimal(7.0), "7.0");
        assert_eq!(format_one_decimal(-0.0), "0.0");
        assert_eq!(format_one_decimal(-0.01), "-0.0");
    }

    #[test]
    fn one_decimal_rounds_the_stored_value() {
        // Stored just below the half: round down.
        assert_eq!(format_one_decimal(0.35), "0.3");
        assert_eq!(format_one_decimal(1.45), "1.4");
        // Stored just above the half: round up.
        assert_eq!(format_one_decimal(0.05), "0.1");
        // Exact ties go away from zero.
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(0.75), "0.8");
        assert_eq!(format_one_decimal(2.25), "2.3");
        assert_eq!(format_one_decimal(-0.25), "-0.3");
    }

    #[test]
    fn leading_float() {
        assert_eq!(parse_leading_float("42"), Some(42.0));
        assert_eq!(parse_leading_float("  3.5"), Some(3.5));
        assert_eq!(parse_leading_float("12k"), Some(12.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-7e2x"), Some(-700.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float(""), None);
    }
}
