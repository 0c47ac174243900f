//! Display helpers shared by the CLI and web front ends.

/// Format an amount with thousands separators and a fixed number of
/// decimals, e.g. `format_amount(159990.0, 0) == "159,990"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Format a price in rupees, e.g. `₹89,990`.
pub fn format_rupees(value: f64) -> String {
    format!("₹{}", format_amount(value, 0))
}

/// Format a rating to one decimal.
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0, 0), "0");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(1000.0, 0), "1,000");
        assert_eq!(format_amount(159990.0, 0), "159,990");
        assert_eq!(format_amount(1234567.0, 0), "1,234,567");
    }

    #[test]
    fn test_format_amount_decimals() {
        assert_eq!(format_amount(44999.5, 2), "44,999.50");
        assert_eq!(format_amount(123456.789, 2), "123,456.79");
        assert_eq!(format_amount(-2500.0, 1), "-2,500.0");
        assert_eq!(format_amount(-0.001, 0), "0");
    }

    #[test]
    fn test_format_rupees_and_rating() {
        assert_eq!(format_rupees(89990.0), "₹89,990");
        assert_eq!(format_rating(4.26), "4.3");
        assert_eq!(format_rating(4.0), "4.0");
    }
}
