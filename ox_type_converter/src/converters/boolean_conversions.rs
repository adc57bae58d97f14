//! Boolean conversion functions

use crate::converter::ParseConfig;

/// Literals accepted as `true`
pub const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Literals accepted as `false`
pub const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// Convert string to boolean
pub fn string_to_boolean(value: &str, _config: &ParseConfig) -> Result<bool, String> {
    if TRUE_LITERALS.contains(&value) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&value) {
        Ok(false)
    } else {
        Err(format!("Failed to parse boolean: '{}' is not a boolean literal", value))
    }
}

/// Convert boolean to string
pub fn boolean_to_string(value: bool) -> String {
    value.to_string()
}
