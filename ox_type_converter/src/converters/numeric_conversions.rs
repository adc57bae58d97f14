//! Numeric conversion functions
//!
//! Integer literals follow the usual prefixed notation: an optional sign,
//! then `0x`/`0X` for hex, `0o`/`0O` or a bare leading `0` for octal,
//! `0b`/`0B` for binary, decimal otherwise. Single underscores may
//! separate digits, or follow a base prefix (`1_000`, `0x_ff`).

use crate::converter::ParseConfig;

/// Parse a signed integer literal, honouring base prefixes
pub fn parse_integer_literal(value: &str) -> Result<i128, String> {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let (radix, digits) = if let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
        (2, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    let prefixed = radix != 10;
    if !underscores_ok(digits, prefixed) {
        return Err(format!("misplaced underscore in integer literal '{}'", value));
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("invalid integer literal '{}'", value));
    }

    let magnitude = u128::from_str_radix(&digits, radix)
        .ok()
        .and_then(|m| i128::try_from(m).ok())
        .ok_or_else(|| format!("integer literal '{}' is out of range", value))?;
    Ok(if negative { -magnitude } else { magnitude })
}

// An underscore must sit between two digits, or between a base prefix and
// the first digit.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    if !digits.contains('_') {
        return true;
    }
    if digits.ends_with('_') || digits.contains("__") {
        return false;
    }
    prefixed || !digits.starts_with('_')
}

/// Convert string to 32-bit integer
pub fn string_to_i32(value: &str, _config: &ParseConfig) -> Result<i32, String> {
    let wide = parse_integer_literal(value)?;
    i32::try_from(wide).map_err(|_| format!("value '{}' is out of range for i32", value))
}

/// Convert string to 64-bit integer
pub fn string_to_i64(value: &str, _config: &ParseConfig) -> Result<i64, String> {
    let wide = parse_integer_literal(value)?;
    i64::try_from(wide).map_err(|_| format!("value '{}' is out of range for i64", value))
}

/// Convert string to 32-bit float
pub fn string_to_f32(value: &str, _config: &ParseConfig) -> Result<f32, String> {
    let parsed = value.parse::<f32>().map_err(|e| format!("Failed to parse f32: {}", e))?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(format!("value '{}' is out of range for f32", value));
    }
    Ok(parsed)
}

/// Convert string to 64-bit float
pub fn string_to_f64(value: &str, _config: &ParseConfig) -> Result<f64, String> {
    let parsed = value.parse::<f64>().map_err(|e| format!("Failed to parse f64: {}", e))?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(format!("value '{}' is out of range for f64", value));
    }
    Ok(parsed)
}

/// Spelled-out infinity; overflowing magnitudes are not infinities
fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(|c| c == '+' || c == '-').unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn i32_to_string(value: i32) -> String {
    value.to_string()
}

pub fn i64_to_string(value: i64) -> String {
    value.to_string()
}

/// Shortest text that parses back to the same `f32`
pub fn f32_to_string(value: f32) -> String {
    value.to_string()
}

/// Shortest text that parses back to the same `f64`
pub fn f64_to_string(value: f64) -> String {
    value.to_string()
}
