//! Radix prefixed number parsing: decimal, then `0x` hexadecimal, then `0b` binary.
//! Overflow is a failure in every base.

pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>()
        .ok()
        .or_else(|| prefixed(text, "0x", 16).and_then(|d| i64::from_str_radix(d, 16).ok()))
        .or_else(|| prefixed(text, "0b", 2).and_then(|d| i64::from_str_radix(d, 2).ok()))
}

pub(crate) fn parse_uint(text: &str) -> Option<u64> {
    text.parse::<u64>()
        .ok()
        .or_else(|| prefixed(text, "0x", 16).and_then(|d| u64::from_str_radix(d, 16).ok()))
        .or_else(|| prefixed(text, "0b", 2).and_then(|d| u64::from_str_radix(d, 2).ok()))
}

/// The digits after `prefix`, provided they are all valid in `radix`.
// from_str_radix alone would also accept a sign after the prefix.
fn prefixed<'t>(text: &'t str, prefix: &str, radix: u32) -> Option<&'t str> {
    let digits = text.strip_prefix(prefix)?;

    if !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)) {
        Some(digits)
    } else {
        None
    }
}
