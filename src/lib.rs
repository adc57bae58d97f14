//! ox_convert - typed values from loosely-typed text
//!
//! Facade over [`ox_type_converter`]. Query parameters, config entries and
//! other text are converted by naming their type:
//!
//! ```
//! let flags = ox_convert::convert("bools", "true,0,T").unwrap();
//! assert_eq!(flags, ox_convert::Value::BooleanList(vec![true, false, true]));
//! ```

pub use ox_type_converter::{
    convert, ConvertError, Converter, ConverterConfig, FromValue, LogicalType, ParseConfig, TypeRegistry, Value,
    DEFAULT_TYPE_REGISTRY,
};

/// Register extra aliases on the process-wide registry.
///
/// Every converter built without an explicit registry sees them for the
/// rest of the process lifetime.
pub fn register_aliases(logical_type: LogicalType, names: &[&str]) {
    log::debug!("Adding {} global alias(es) for {}", names.len(), logical_type);
    DEFAULT_TYPE_REGISTRY.add_alias(logical_type, names);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_aliases_reaches_new_converters() {
        register_aliases(LogicalType::Float64List, &["coordinates"]);
        let converter = Converter::new();
        assert_eq!(converter.convert("coordinates", "1.5,-2"), Ok(Value::Float64List(vec![1.5, -2.0])));
    }
}
