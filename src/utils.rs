/// Formats an amount in minor currency units as a US-dollar string,
/// e.g. `123456` -> `"$1,234.56"`.
pub fn format_currency(minor_units: i64) -> String {
    let negative = minor_units < 0;
    let abs = minor_units.unsigned_abs();
    let cents = abs % 100;

    let digits = (abs / 100).to_string();
    let mut dollars = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            dollars.push(',');
        }
        dollars.push(c);
    }

    if negative {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}
