use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::converters;
use crate::error::ConvertError;
use crate::logical_type::LogicalType;
use crate::registry::{TypeRegistry, DEFAULT_TYPE_REGISTRY};
use crate::value::{FromValue, Value};

pub const DEFAULT_LIST_PREFIX: &str = "[";
pub const DEFAULT_LIST_SUFFIX: &str = "]";
pub const DEFAULT_LIST_SEPARATOR: &str = ",";
pub const DEFAULT_DATE_LAYOUT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatting options shared by every parse and format rule.
///
/// Layouts use chrono's strftime syntax. `list_prefix` and `list_suffix`
/// are carried for bracketed lists but not applied when splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub list_prefix: String,
    pub list_suffix: String,
    pub list_separator: String,
    pub date_layout: String,
    pub datetime_layout: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            list_prefix: DEFAULT_LIST_PREFIX.to_string(),
            list_suffix: DEFAULT_LIST_SUFFIX.to_string(),
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
            date_layout: DEFAULT_DATE_LAYOUT.to_string(),
            datetime_layout: DEFAULT_DATETIME_LAYOUT.to_string(),
        }
    }
}

/// Converts raw text into typed [`Value`]s, resolving type names through a
/// shared [`TypeRegistry`].
#[derive(Debug, Clone)]
pub struct Converter {
    registry: Arc<TypeRegistry>,
    config: ParseConfig,
}

impl Converter {
    /// Creates a converter backed by [`DEFAULT_TYPE_REGISTRY`] with the
    /// default `ParseConfig`:
    /// - list separator `,` (prefix `[`, suffix `]`)
    /// - date layout `%Y-%m-%d`
    /// - date-time layout `%Y-%m-%d %H:%M:%S`
    pub fn new() -> Self {
        Self {
            registry: Arc::clone(&DEFAULT_TYPE_REGISTRY),
            config: ParseConfig::default(),
        }
    }

    /// Sets the list markers and the separator lists are split on.
    pub fn with_list_delimiters(mut self, prefix: &str, suffix: &str, separator: &str) -> Self {
        self.config.list_prefix = prefix.to_string();
        self.config.list_suffix = suffix.to_string();
        self.config.list_separator = separator.to_string();
        self
    }

    pub fn with_date_layout(mut self, layout: &str) -> Self {
        self.config.date_layout = layout.to_string();
        self
    }

    pub fn with_datetime_layout(mut self, layout: &str) -> Self {
        self.config.datetime_layout = layout.to_string();
        self
    }

    /// Uses the given registry instead of the process-wide default.
    pub fn with_registry(mut self, registry: Arc<TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_parse_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn parse_config(&self) -> &ParseConfig {
        &self.config
    }

    /// Converts `raw` into the type `type_name` resolves to.
    ///
    /// List types are all-or-nothing: the first element that fails to parse
    /// aborts the conversion and is reported with its index.
    pub fn convert(&self, type_name: &str, raw: &str) -> Result<Value, ConvertError> {
        let logical_type = self.registry.resolve(type_name);
        let parse = match converters::parser_for(logical_type) {
            Some(parse) => parse,
            None => {
                debug!("No type registered for alias '{}'", type_name);
                return Err(ConvertError::UnsupportedType {
                    type_name: type_name.to_string(),
                });
            }
        };

        parse(raw, &self.config).map_err(|e| {
            debug!("Converting {:?} as '{}' failed: {}", raw, type_name, e);
            e
        })
    }

    /// Converts `raw` and writes the result into `destination`.
    ///
    /// The destination is left untouched on any error.
    pub fn convert_into<T: FromValue>(&self, type_name: &str, raw: &str, destination: &mut T) -> Result<(), ConvertError> {
        *destination = self.convert_as(type_name, raw)?;
        Ok(())
    }

    /// Converts `raw` and returns it as `T`.
    pub fn convert_as<T: FromValue>(&self, type_name: &str, raw: &str) -> Result<T, ConvertError> {
        T::from_value(self.convert(type_name, raw)?)
    }

    /// Formats a value back into text using this converter's layouts and
    /// separator. The result converts back into an equal value.
    pub fn format(&self, value: &Value) -> Result<String, ConvertError> {
        converters::format_value(value, &self.config)
    }

    /// Resolves `type_name` through this converter's registry.
    pub fn resolve(&self, type_name: &str) -> LogicalType {
        self.registry.resolve(type_name)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts with a default [`Converter`].
pub fn convert(type_name: &str, raw: &str) -> Result<Value, ConvertError> {
    Converter::new().convert(type_name, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn private_converter() -> Converter {
        Converter::new().with_registry(Arc::new(TypeRegistry::with_defaults()))
    }

    #[test]
    fn test_default_parse_config() {
        let config = ParseConfig::default();
        assert_eq!(config.list_prefix, "[");
        assert_eq!(config.list_suffix, "]");
        assert_eq!(config.list_separator, ",");
        assert_eq!(config.date_layout, "%Y-%m-%d");
        assert_eq!(config.datetime_layout, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_convert_scalars() {
        let converter = private_converter();
        assert_eq!(converter.convert("int", "10"), Ok(Value::Int32(10)));
        assert_eq!(converter.convert("int32", "10"), Ok(Value::Int32(10)));
        assert_eq!(converter.convert("int64", "10"), Ok(Value::Int64(10)));
        assert_eq!(converter.convert("float32", "1.1"), Ok(Value::Float32(1.1)));
        assert_eq!(converter.convert("float64", "1.1"), Ok(Value::Float64(1.1)));
        assert_eq!(converter.convert("double", "1.1"), Ok(Value::Float64(1.1)));
        assert_eq!(converter.convert("string", "abc"), Ok(Value::Text("abc".to_string())));
        assert_eq!(converter.convert("bool", "true"), Ok(Value::Boolean(true)));
        assert_eq!(converter.convert("boolean", "F"), Ok(Value::Boolean(false)));
        assert_eq!(converter.convert("date", "2022-01-01"), Ok(Value::Date(local(2022, 1, 1, 0, 0, 0))));
        assert_eq!(
            converter.convert("datetime", "2022-01-01 12:00:00"),
            Ok(Value::DateTime(local(2022, 1, 1, 12, 0, 0)))
        );
    }

    #[test]
    fn test_convert_lists() {
        let converter = private_converter();
        assert_eq!(converter.convert("ints", "1,2,3,4"), Ok(Value::Int32List(vec![1, 2, 3, 4])));
        assert_eq!(converter.convert("float32s", "1,2,3,4"), Ok(Value::Float32List(vec![1.0, 2.0, 3.0, 4.0])));
        assert_eq!(converter.convert("float64s", "1,2,3,4"), Ok(Value::Float64List(vec![1.0, 2.0, 3.0, 4.0])));
        assert_eq!(converter.convert("bools", "true,false,true"), Ok(Value::BooleanList(vec![true, false, true])));
        assert_eq!(
            converter.convert("strings", "1,2,3,4"),
            Ok(Value::TextList(vec!["1".into(), "2".into(), "3".into(), "4".into()]))
        );
        assert_eq!(
            converter.convert("dates", "2022-01-01,2022-01-02"),
            Ok(Value::DateList(vec![local(2022, 1, 1, 0, 0, 0), local(2022, 1, 2, 0, 0, 0)]))
        );
        assert_eq!(
            converter.convert("datetimes", "2022-01-01 12:00:00,2022-01-02 12:00:00"),
            Ok(Value::DateTimeList(vec![local(2022, 1, 1, 12, 0, 0), local(2022, 1, 2, 12, 0, 0)]))
        );
    }

    #[test]
    fn test_list_failure_is_all_or_nothing() {
        let err = private_converter().convert("ints", "1,x,3").unwrap_err();
        match err {
            ConvertError::ConversionFailed { target, value, index, .. } => {
                assert_eq!(target, LogicalType::Int32);
                assert_eq!(value, "x");
                assert_eq!(index, Some(1));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_type() {
        let err = private_converter().convert("unknownalias", "1").unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedType { type_name: "unknownalias".to_string() });
    }

    #[test]
    fn test_scalar_failures() {
        let converter = private_converter();
        assert!(converter.convert("int", "ten").unwrap_err().is_conversion_failed());
        assert!(converter.convert("int", "2147483648").unwrap_err().is_conversion_failed());
        assert!(converter.convert("bool", "yes").unwrap_err().is_conversion_failed());
        assert!(converter.convert("date", "01/02/2022").unwrap_err().is_conversion_failed());
        assert!(converter.convert("float64", "").unwrap_err().is_conversion_failed());
    }

    #[test]
    fn test_float_overflow_fails() {
        let converter = private_converter();
        for (type_name, raw) in [("float32", "1e40"), ("float64", "1e400"), ("float32s", "1,1e40")] {
            let err = converter.convert(type_name, raw).unwrap_err();
            assert!(err.is_conversion_failed(), "{} {:?}: {}", type_name, raw, err);
        }
        assert!(matches!(
            converter.convert("float32s", "1,1e40"),
            Err(ConvertError::ConversionFailed { index: Some(1), .. })
        ));
        assert_eq!(converter.convert("float64", "-inf"), Ok(Value::Float64(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_empty_input_is_not_special_cased() {
        let converter = private_converter();
        assert_eq!(converter.convert("strings", ""), Ok(Value::TextList(vec![String::new()])));
        assert_eq!(converter.convert("string", ""), Ok(Value::Text(String::new())));
        assert!(converter.convert("ints", "").is_err());
    }

    #[test]
    fn test_custom_separator_and_layouts() {
        let converter = private_converter()
            .with_list_delimiters("(", ")", ";")
            .with_date_layout("%d/%m/%Y")
            .with_datetime_layout("%d/%m/%Y %H:%M");

        assert_eq!(converter.parse_config().list_prefix, "(");
        assert_eq!(converter.convert("ints", "1;2"), Ok(Value::Int32List(vec![1, 2])));
        assert_eq!(converter.convert("strings", "a,b;c"), Ok(Value::TextList(vec!["a,b".into(), "c".into()])));
        assert_eq!(converter.convert("date", "02/01/2022"), Ok(Value::Date(local(2022, 1, 2, 0, 0, 0))));
        assert_eq!(
            converter.convert("datetime", "02/01/2022 08:30"),
            Ok(Value::DateTime(local(2022, 1, 2, 8, 30, 0)))
        );
    }

    #[test]
    fn test_layouts_missing_fields() {
        let converter = private_converter().with_datetime_layout("%Y-%m-%d").with_date_layout("%Y-%m");
        assert_eq!(converter.convert("datetime", "2022-01-01"), Ok(Value::DateTime(local(2022, 1, 1, 0, 0, 0))));
        assert_eq!(converter.convert("date", "2022-03"), Ok(Value::Date(local(2022, 3, 1, 0, 0, 0))));
    }

    #[test]
    fn test_convert_into() {
        let converter = private_converter();

        let mut port = 0i32;
        converter.convert_into("int", "8080", &mut port).unwrap();
        assert_eq!(port, 8080);

        let mut flags: Vec<bool> = Vec::new();
        converter.convert_into("bools", "1,0", &mut flags).unwrap();
        assert_eq!(flags, vec![true, false]);

        let mut when: Option<DateTime<Local>> = None;
        converter.convert_into("date", "2022-01-01", &mut when).unwrap();
        assert_eq!(when, Some(local(2022, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_convert_into_shape_mismatch_leaves_destination() {
        let converter = private_converter();
        let mut wide = 5i64;
        let err = converter.convert_into("int", "10", &mut wide).unwrap_err();
        assert_eq!(err, ConvertError::ShapeMismatch { expected: "i64", found: LogicalType::Int32 });
        assert_eq!(wide, 5);

        let err = converter.convert_into("int64", "nope", &mut wide).unwrap_err();
        assert!(err.is_conversion_failed());
        assert_eq!(wide, 5);
    }

    #[test]
    fn test_convert_as() {
        let converter = private_converter();
        let names: Vec<String> = converter.convert_as("strings", "a,b").unwrap();
        assert_eq!(names, vec!["a", "b"]);
        assert!(converter.convert_as::<String>("unknownalias", "a").unwrap_err().is_unsupported_type());
    }

    #[test]
    fn test_private_registry_is_isolated() {
        let registry = Arc::new(TypeRegistry::new());
        registry.add_alias(LogicalType::Int64, &["long"]);
        let converter = Converter::new().with_registry(Arc::clone(&registry));

        assert_eq!(converter.convert("long", "7"), Ok(Value::Int64(7)));
        assert!(converter.convert("int", "7").unwrap_err().is_unsupported_type());
        assert_eq!(DEFAULT_TYPE_REGISTRY.resolve("long"), LogicalType::Unknown);
    }

    #[test]
    fn test_registry_shared_between_converters() {
        let registry = Arc::new(TypeRegistry::with_defaults());
        let first = Converter::new().with_registry(Arc::clone(&registry));
        let second = first.clone().with_datetime_layout("%s");

        registry.add_alias(LogicalType::Int32, &["interage"]);
        assert_eq!(first.convert("interage", "100"), Ok(Value::Int32(100)));
        assert_eq!(second.resolve("interage"), LogicalType::Int32);
    }

    #[test]
    fn test_format_round_trip() {
        let converter = private_converter();
        let cases = [
            ("int", "-42"),
            ("int64", "9223372036854775807"),
            ("float32", "1.1"),
            ("float64", "0.30000000000000004"),
            ("string", "hello"),
            ("bool", "true"),
            ("date", "2022-01-01"),
            ("datetime", "2022-01-01 12:30:00"),
            ("ints", "1,2,3"),
            ("dates", "2022-01-01,2023-06-30"),
        ];
        for (type_name, raw) in cases {
            let value = converter.convert(type_name, raw).unwrap();
            let text = converter.format(&value).unwrap();
            assert_eq!(text, raw, "type {}", type_name);
            assert_eq!(converter.convert(type_name, &text).unwrap(), value);
        }
    }

    #[test]
    fn test_format_normalizes_literals() {
        let converter = private_converter();
        let value = converter.convert("ints", "0x10,010,+3").unwrap();
        assert_eq!(value, Value::Int32List(vec![16, 8, 3]));
        assert_eq!(converter.format(&value).unwrap(), "16,8,3");
        assert_eq!(converter.format(&Value::Boolean(false)).unwrap(), "false");
    }
}
