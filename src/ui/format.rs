/// Group separator used by the ru locale (non-breaking space).
pub const RU_GROUP_SEPARATOR: char = '\u{a0}';
pub const RU_DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number the way the ru locale does: at most three fraction digits (trailing zeros
/// dropped), comma decimal separator, and thousands grouped with a non-breaking space once the
/// integer part has five or more digits (`5000`, `10 000`).
pub fn format_ru(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(RU_DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(RU_GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
