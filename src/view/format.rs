//! Display formatting for numbers and dates (en-US conventions).

use chrono::NaiveDate;

/// Maximum fraction digits kept when grouping, matching en-US defaults.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with `,` thousands grouping and up to three fraction
/// digits, trailing zeros trimmed: `2500000.0` → `"2,500,000"`.
///
/// Rounding works on the shortest decimal form of `n` and breaks ties away
/// from zero, so `1.0625` → `"1.063"`.
pub fn format_grouped(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (int_part, frac_part) = round_decimal(&n.abs().to_string(), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if n.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Round a plain decimal string (no sign, no exponent) to `places` fraction
/// digits, half away from zero. Returns the integer and fraction digits.
fn round_decimal(decimal: &str, places: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= places {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Short locale date, `M/D/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn format_days(days: u32) -> String {
    format!("{days} days")
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// `"{amount} {currency}"` with a grouped amount.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", format_grouped(amount), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_whole_numbers() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(2_500_000.0), "2,500,000");
        assert_eq!(format_grouped(125_000_000.0), "125,000,000");
        assert_eq!(format_grouped(150_000_000.0), "150,000,000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.1234), "0.123");
        assert_eq!(format_grouped(1.0006), "1.001");
        assert_eq!(format_grouped(12.100), "12.1");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_grouped(1.0625), "1.063");
        assert_eq!(format_grouped(1000.0625), "1,000.063");
        assert_eq!(format_grouped(0.0625), "0.063");
        assert_eq!(format_grouped(-0.0625), "-0.063");
        assert_eq!(format_grouped(1.0005), "1.001");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_grouped(0.9995), "1");
        assert_eq!(format_grouped(999.9996), "1,000");
        assert_eq!(format_grouped(99_999.9999), "100,000");
    }

    #[test]
    fn handles_sign_and_non_finite() {
        assert_eq!(format_grouped(-1_234_567.891), "-1,234,567.891");
        assert_eq!(format_grouped(-0.0), "0");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
    }

    #[test]
    fn formats_dates_and_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "1/5/2024");
        assert_eq!(format_days(45), "45 days");
        assert_eq!(format_percent(30), "30%");
        assert_eq!(format_money(150_000_000.0, "UZS"), "150,000,000 UZS");
    }
}
