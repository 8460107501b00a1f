//! Locale-aware money formatting.

mod locale;

pub use locale::{Locale, DEFAULT_LOCALE};

/// Format an amount with two fraction digits and locale grouping.
///
/// `money_format(1234.56, None)` gives `"1,234.56"` and
/// `money_format(1234.56, Some("de-DE"))` gives `"1.234,56"`.
pub fn money_format(amount: f64, locale: Option<&str>) -> String {
    let locale = Locale::resolve(locale.unwrap_or(DEFAULT_LOCALE));
    format_with(amount, &locale)
}

/// Format an amount using an already resolved locale.
pub fn format_with(amount: f64, locale: &Locale) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let (integer, fraction) = round_cents(amount.abs());

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if amount < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, locale.group_separator));
    out.push(locale.decimal_separator);
    out.push_str(&fraction);
    out
}

/// Round a non-negative amount to two fraction digits, half away from zero.
///
/// Rounding works on the shortest decimal form of the value, so `1.005`
/// becomes `1.01` even though its binary value is slightly below.
fn round_cents(value: f64) -> (String, String) {
    let shortest = value.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().collect();
    let mut rest = fraction.bytes();
    digits.push(rest.next().unwrap_or(b'0'));
    digits.push(rest.next().unwrap_or(b'0'));

    if rest.next().is_some_and(|d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let text = |bytes: &[u8]| bytes.iter().map(|&b| char::from(b)).collect::<String>();
    (text(&digits[..split]), text(&digits[split..]))
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
