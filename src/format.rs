//! Digit grouping and currency rendering.
//!
//! Both the amount input field and the results panel use UK-style grouping:
//! commas every three digits from the least-significant end.

/// Groups a plain digit string with comma separators: "1234567" -> "1,234,567".
///
/// The input must contain digits only; separators are inserted, never removed.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders a monetary value in pounds with exactly two decimal places and
/// thousands grouping: 1169.1800 -> "£1,169.18".
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("£{}.{}", group_digits(whole), fraction)
}
