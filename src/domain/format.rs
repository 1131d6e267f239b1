//! Number formatting for summaries and reports.

/// `$1,234.56`, with a leading minus for negative amounts.
pub fn format_currency(value: f64) -> String {
    let cents = round_cents(value);
    let sign = if cents < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(cents.abs()))
}

/// Like [`format_currency`] but always signed: `+$10.00`, `-$4.50`.
pub fn format_signed_currency(value: f64) -> String {
    let cents = round_cents(value);
    let sign = if cents < 0.0 { "-" } else { "+" };
    format!("{sign}${}", group_thousands(cents.abs()))
}

/// Fraction rendered as a percentage: `0.1234` with one decimal is `12.3%`.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Ratio with two decimals; infinity is spelled `inf`.
pub fn format_ratio(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Amounts that round to zero come back as `0.0`, never `-0.0`.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    format!("{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(75.0), "$75.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-50.0), "-$50.00");
        assert_eq!(format_currency(-100_000.0), "-$100,000.00");
    }

    #[test]
    fn signed_currency() {
        assert_eq!(format_signed_currency(100.0), "+$100.00");
        assert_eq!(format_signed_currency(-2500.0), "-$2,500.00");
        assert_eq!(format_signed_currency(0.0), "+$0.00");
    }

    #[test]
    fn amounts_rounding_to_zero_are_unsigned() {
        assert_eq!(format_currency(-0.004), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_signed_currency(-0.004), "+$0.00");
        assert_eq!(format_currency(-0.006), "-$0.01");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(2.0 / 3.0, 1), "66.7%");
        assert_eq!(format_percent(0.05, 2), "5.00%");
        assert_eq!(format_percent(100.0 / 75.0, 1), "133.3%");
    }

    #[test]
    fn ratio() {
        assert_eq!(format_ratio(2.5), "2.50");
        assert_eq!(format_ratio(f64::INFINITY), "inf");
    }
}
