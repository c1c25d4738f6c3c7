//! Numeric interpretation of lookup queries.
//!
//! Accepts decimal floating literals (`6.9`, `+2`, `.5`, `4e0`) and unsigned
//! integer literals with a `0x`/`0o`/`0b` prefix. Non-finite values are
//! rejected so `NaN`/`inf` never reach the numeric rules.

/// Parses an already-trimmed query as a finite number.
pub(crate) fn parse_query_number(text: &str) -> Option<f64> {
    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }
    if !looks_decimal(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns the value as an atomic-number candidate when it is a whole number.
pub(crate) fn as_whole_number(value: f64) -> Option<u64> {
    if value.fract() != 0.0 || value < 0.0 || value > u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1].to_ascii_lowercase() {
        b'x' => 16,
        b'o' => 8,
        b'b' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix)
        .ok()
        .map(|value| value as f64)
}

// `f64::from_str` also takes `inf`, `infinity` and `nan`; only plain decimal
// literals count here.
fn looks_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}
