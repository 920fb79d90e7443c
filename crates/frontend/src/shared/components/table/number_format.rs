//! Number formatting for stat cards, tables and chart labels

/// Formats a number with comma thousands separators and the given number
/// of decimals.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Insert a comma every 3 digits from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Integer with thousands separators: `1,844`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Money with currency prefix. Whole amounts drop the cents: `$43,900`,
/// otherwise two decimals: `$12.50`.
pub fn format_money(value: f64, currency: &str) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    let body = format_number_with_decimals(value.abs(), decimals);
    if value < 0.0 {
        format!("-{}{}", currency, body)
    } else {
        format!("{}{}", currency, body)
    }
}

/// Thousands with one decimal, as in chart legends: `$83.5k`
pub fn format_money_thousands(value: f64, currency: &str) -> String {
    format!("{}{:.1}k", currency, value / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1844.0), "1,844");
        assert_eq!(format_number_int(439.0), "439");
        assert_eq!(format_number_int(0.0), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(43900.0, "$"), "$43,900");
        assert_eq!(format_money(23400.0, "$"), "$23,400");
        assert_eq!(format_money(12.5, "$"), "$12.50");
        assert_eq!(format_money(-4900.0, "$"), "-$4,900");
    }

    #[test]
    fn test_format_money_thousands() {
        assert_eq!(format_money_thousands(83510.0, "$"), "$83.5k");
        assert_eq!(format_money_thousands(26060.0, "$"), "$26.1k");
        assert_eq!(format_money_thousands(9230.0, "$"), "$9.2k");
    }
}
