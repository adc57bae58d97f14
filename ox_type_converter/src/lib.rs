//! ox_type_converter - Alias-resolved text to typed value conversion
//!
//! A type name such as `"int"` or `"datetimes"` is resolved through a
//! [`TypeRegistry`] to a [`LogicalType`], and the raw text is parsed by the
//! rule registered for that type. List types split the text on a configured
//! separator and parse every element with the scalar rule.
//!
//! ```
//! use ox_type_converter::{Converter, Value};
//!
//! let converter = Converter::new();
//! assert_eq!(converter.convert("ints", "1,2,3").unwrap(), Value::Int32List(vec![1, 2, 3]));
//!
//! let mut port: i32 = 0;
//! converter.convert_into("int", "8080", &mut port).unwrap();
//! assert_eq!(port, 8080);
//! ```

pub mod config;
pub mod converter;
pub mod converters;
pub mod error;
pub mod logical_type;
pub mod registry;
pub mod value;

pub use config::ConverterConfig;
pub use converter::{convert, Converter, ParseConfig};
pub use error::ConvertError;
pub use logical_type::LogicalType;
pub use registry::{TypeRegistry, DEFAULT_TYPE_REGISTRY};
pub use value::{FromValue, Value};

// Re-export commonly used types
pub use std::collections::HashMap;
pub use chrono::{DateTime, Local};
