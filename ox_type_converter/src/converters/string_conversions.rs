//! String conversion functions

use crate::converter::ParseConfig;

/// Convert string to string (identity conversion)
pub fn string_to_string(value: &str, _config: &ParseConfig) -> Result<String, String> {
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_string() {
        let config = ParseConfig::default();
        assert_eq!(string_to_string("hello", &config), Ok("hello".to_string()));
        assert_eq!(string_to_string(" padded ", &config), Ok(" padded ".to_string()));
        assert_eq!(string_to_string("", &config), Ok(String::new()));
    }
}
