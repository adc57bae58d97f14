//! Delimited list conversion functions
//!
//! Lists are split on the configured separator with no quoting or
//! escaping, and every piece is parsed by the element rule.

use crate::converter::ParseConfig;
use crate::converters::{parse_scalar, ElementFn};
use crate::error::ConvertError;
use crate::logical_type::LogicalType;

/// Split a raw list on `separator`.
///
/// An empty separator splits into single characters.
pub fn split_list<'a>(value: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        value
            .char_indices()
            .map(|(i, c)| &value[i..i + c.len_utf8()])
            .collect()
    } else {
        value.split(separator).collect()
    }
}

/// Parse every element of a raw list, stopping at the first failure.
pub fn parse_list<T>(
    element: LogicalType,
    value: &str,
    config: &ParseConfig,
    parse: ElementFn<T>,
) -> Result<Vec<T>, ConvertError> {
    split_list(value, &config.list_separator)
        .into_iter()
        .enumerate()
        .map(|(index, piece)| parse_scalar(element, piece, config, parse).map_err(|e| e.at_index(index)))
        .collect()
}

/// Join formatted elements with `separator`
pub fn join_list<I>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    items.into_iter().collect::<Vec<String>>().join(separator)
}
