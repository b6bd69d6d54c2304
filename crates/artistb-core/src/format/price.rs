//! Artwork price labels.

pub const SOLD_LABEL: &str = "Sold";
pub const PRICE_ON_REQUEST_LABEL: &str = "Price on request";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Builds the label shown next to an artwork.
///
/// Unavailable works are always "Sold", whatever price is stored.
pub fn price_label(available_for_sale: bool, amount: Option<f64>, currency: Option<&str>) -> String {
    if !available_for_sale {
        return SOLD_LABEL.to_string();
    }
    match amount {
        Some(amount) => format_currency(amount, currency.unwrap_or(DEFAULT_CURRENCY)),
        None => PRICE_ON_REQUEST_LABEL.to_string(),
    }
}

/// Formats an amount the way an en-US currency formatter does.
///
/// Whole amounts get no fraction digits, anything else is rounded half away
/// from zero to two. Zero-decimal currencies (JPY, KRW, ...) drop trailing
/// fraction zeros. Codes that are not three ASCII letters fall back to USD.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = normalize_code(currency);
    let max_digits = if amount.fract() == 0.0 { 0 } else { 2 };
    let min_digits = max_digits.min(minor_unit_digits(&code));
    let number = group_thousands(&round_decimal(amount.abs(), max_digits, min_digits));
    let sign = if amount < 0.0 && number.chars().any(|c| c != '0' && c.is_ascii_digit()) {
        "-"
    } else {
        ""
    };

    match symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{code}\u{a0}{number}"),
    }
}

fn normalize_code(currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        code
    } else {
        DEFAULT_CURRENCY.to_string()
    }
}

fn minor_unit_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

/// Rounds the shortest decimal form of `value` half away from zero to
/// `max_digits` fraction digits, then trims trailing zeros down to
/// `min_digits`. Works on the digit string so `1.005` rounds to `1.01`.
fn round_decimal(value: f64, max_digits: usize, min_digits: usize) -> String {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let round_up = frac_part
        .as_bytes()
        .get(max_digits)
        .is_some_and(|digit| *digit >= b'5');

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(max_digits))
        .collect();
    digits.resize(int_part.len() + max_digits, b'0');

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

    let (int_digits, frac_digits) = digits.split_at(digits.len() - max_digits);
    let int_digits: String = int_digits.iter().map(|&d| char::from(d)).collect();
    let mut frac_digits: String = frac_digits.iter().map(|&d| char::from(d)).collect();
    while frac_digits.len() > min_digits && frac_digits.ends_with('0') {
        frac_digits.pop();
    }

    if frac_digits.is_empty() {
        int_digits
    } else {
        format!("{int_digits}.{frac_digits}")
    }
}

fn symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "ILS" => "₪",
        _ => return None,
    };
    Some(symbol)
}

fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}
