/// Normalizes raw phone input into Saudi international format.
///
/// Every non-digit is dropped first, so a `+` added by an earlier pass is
/// stripped and re-derived on the next keystroke.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("966") {
        format!("+{}", digits)
    } else if digits.starts_with("05") {
        format!("+966{}", &digits[1..])
    } else if digits.starts_with('5') && digits.len() == 9 {
        format!("+966{}", digits)
    } else {
        digits
    }
}
