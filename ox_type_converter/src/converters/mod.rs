//! Parse and format rules
//!
//! Each family of types lives in its own module. This module holds the
//! dispatch table mapping a [`LogicalType`] to its parse rule, and the
//! inverse formatter.

pub mod boolean_conversions;
pub mod date_conversions;
pub mod list_conversions;
pub mod numeric_conversions;
pub mod string_conversions;

pub use boolean_conversions::*;
pub use date_conversions::*;
pub use list_conversions::*;
pub use numeric_conversions::*;
pub use string_conversions::*;

use crate::converter::ParseConfig;
use crate::error::ConvertError;
use crate::logical_type::LogicalType;
use crate::value::Value;

/// Parse rule for a single logical type
pub type ParseFn = fn(&str, &ParseConfig) -> Result<Value, ConvertError>;

/// Element rule shared by a scalar type and its list type
pub type ElementFn<T> = fn(&str, &ParseConfig) -> Result<T, String>;

/// Run an element rule, tagging a failure with the target type
pub fn parse_scalar<T>(target: LogicalType, value: &str, config: &ParseConfig, parse: ElementFn<T>) -> Result<T, ConvertError> {
    parse(value, config).map_err(|reason| ConvertError::failed(target, value, reason))
}

/// Look up the parse rule for a type; `None` for `LogicalType::Unknown`
pub fn parser_for(logical_type: LogicalType) -> Option<ParseFn> {
    use crate::logical_type::LogicalType as T;

    let parser: ParseFn = match logical_type {
        T::Unknown => return None,

        T::Int32 => |v, c| parse_scalar(T::Int32, v, c, string_to_i32).map(Value::Int32),
        T::Int64 => |v, c| parse_scalar(T::Int64, v, c, string_to_i64).map(Value::Int64),
        T::Float32 => |v, c| parse_scalar(T::Float32, v, c, string_to_f32).map(Value::Float32),
        T::Float64 => |v, c| parse_scalar(T::Float64, v, c, string_to_f64).map(Value::Float64),
        T::Text => |v, c| parse_scalar(T::Text, v, c, string_to_string).map(Value::Text),
        T::Boolean => |v, c| parse_scalar(T::Boolean, v, c, string_to_boolean).map(Value::Boolean),
        T::Date => |v, c| parse_scalar(T::Date, v, c, string_to_date).map(Value::Date),
        T::DateTime => |v, c| parse_scalar(T::DateTime, v, c, string_to_datetime).map(Value::DateTime),

        T::Int32List => |v, c| parse_list(T::Int32, v, c, string_to_i32).map(Value::Int32List),
        T::Int64List => |v, c| parse_list(T::Int64, v, c, string_to_i64).map(Value::Int64List),
        T::Float32List => |v, c| parse_list(T::Float32, v, c, string_to_f32).map(Value::Float32List),
        T::Float64List => |v, c| parse_list(T::Float64, v, c, string_to_f64).map(Value::Float64List),
        T::TextList => |v, c| parse_list(T::Text, v, c, string_to_string).map(Value::TextList),
        T::BooleanList => |v, c| parse_list(T::Boolean, v, c, string_to_boolean).map(Value::BooleanList),
        T::DateList => |v, c| parse_list(T::Date, v, c, string_to_date).map(Value::DateList),
        T::DateTimeList => |v, c| parse_list(T::DateTime, v, c, string_to_datetime).map(Value::DateTimeList),
    };
    Some(parser)
}

/// Format a value with the layouts and separator of `config`
pub fn format_value(value: &Value, config: &ParseConfig) -> Result<String, ConvertError> {
    let date_layout = config.date_layout.as_str();
    let datetime_layout = config.datetime_layout.as_str();
    let separator = config.list_separator.as_str();

    match value {
        Value::Int32(v) => Ok(i32_to_string(*v)),
        Value::Int64(v) => Ok(i64_to_string(*v)),
        Value::Float32(v) => Ok(f32_to_string(*v)),
        Value::Float64(v) => Ok(f64_to_string(*v)),
        Value::Text(v) => Ok(v.clone()),
        Value::Boolean(v) => Ok(boolean_to_string(*v)),
        Value::Date(v) => datetime_to_string(v, date_layout).map_err(|e| format_failed(value, e)),
        Value::DateTime(v) => datetime_to_string(v, datetime_layout).map_err(|e| format_failed(value, e)),

        Value::Int32List(items) => Ok(join_list(items.iter().map(|v| i32_to_string(*v)), separator)),
        Value::Int64List(items) => Ok(join_list(items.iter().map(|v| i64_to_string(*v)), separator)),
        Value::Float32List(items) => Ok(join_list(items.iter().map(|v| f32_to_string(*v)), separator)),
        Value::Float64List(items) => Ok(join_list(items.iter().map(|v| f64_to_string(*v)), separator)),
        Value::TextList(items) => Ok(items.join(separator)),
        Value::BooleanList(items) => Ok(join_list(items.iter().map(|v| boolean_to_string(*v)), separator)),
        Value::DateList(items) => format_dates(value, items, date_layout, separator),
        Value::DateTimeList(items) => format_dates(value, items, datetime_layout, separator),
    }
}

fn format_dates(
    value: &Value,
    items: &[chrono::DateTime<chrono::Local>],
    layout: &str,
    separator: &str,
) -> Result<String, ConvertError> {
    let parts = items
        .iter()
        .map(|v| datetime_to_string(v, layout))
        .collect::<Result<Vec<String>, String>>()
        .map_err(|e| format_failed(value, e))?;
    Ok(parts.join(separator))
}

fn format_failed(value: &Value, reason: String) -> ConvertError {
    ConvertError::ConversionFailed {
        target: value.logical_type(),
        value: format!("{:?}", value),
        index: None,
        reason,
    }
}
