//! Converted values and typed destinations.

use chrono::{DateTime, Local};

use crate::error::ConvertError;
use crate::logical_type::LogicalType;

/// A converted value, tagged with the logical type it was produced for.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Boolean(bool),
    Date(DateTime<Local>),
    DateTime(DateTime<Local>),

    Int32List(Vec<i32>),
    Int64List(Vec<i64>),
    Float32List(Vec<f32>),
    Float64List(Vec<f64>),
    TextList(Vec<String>),
    BooleanList(Vec<bool>),
    DateList(Vec<DateTime<Local>>),
    DateTimeList(Vec<DateTime<Local>>),
}

impl Value {
    pub fn logical_type(&self) -> LogicalType {
        match self {
            Value::Int32(_) => LogicalType::Int32,
            Value::Int64(_) => LogicalType::Int64,
            Value::Float32(_) => LogicalType::Float32,
            Value::Float64(_) => LogicalType::Float64,
            Value::Text(_) => LogicalType::Text,
            Value::Boolean(_) => LogicalType::Boolean,
            Value::Date(_) => LogicalType::Date,
            Value::DateTime(_) => LogicalType::DateTime,
            Value::Int32List(_) => LogicalType::Int32List,
            Value::Int64List(_) => LogicalType::Int64List,
            Value::Float32List(_) => LogicalType::Float32List,
            Value::Float64List(_) => LogicalType::Float64List,
            Value::TextList(_) => LogicalType::TextList,
            Value::BooleanList(_) => LogicalType::BooleanList,
            Value::DateList(_) => LogicalType::DateList,
            Value::DateTimeList(_) => LogicalType::DateTimeList,
        }
    }

    /// Number of elements for list values, `None` for scalars
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Value::Int32List(v) => Some(v.len()),
            Value::Int64List(v) => Some(v.len()),
            Value::Float32List(v) => Some(v.len()),
            Value::Float64List(v) => Some(v.len()),
            Value::TextList(v) => Some(v.len()),
            Value::BooleanList(v) => Some(v.len()),
            Value::DateList(v) | Value::DateTimeList(v) => Some(v.len()),
            _ => None,
        }
    }
}

/// A destination a [`Value`] can be assigned into.
///
/// Implemented for every shape a conversion can produce. A value of any
/// other shape is rejected with [`ConvertError::ShapeMismatch`].
pub trait FromValue: Sized {
    /// Human readable name of the destination shape, used in errors
    const SHAPE: &'static str;

    fn from_value(value: Value) -> Result<Self, ConvertError>;
}

fn mismatch<T: FromValue>(value: &Value) -> ConvertError {
    ConvertError::ShapeMismatch {
        expected: T::SHAPE,
        found: value.logical_type(),
    }
}

macro_rules! impl_from_value {
    ($ty:ty, $shape:literal, $($variant:ident)|+) => {
        impl FromValue for $ty {
            const SHAPE: &'static str = $shape;

            fn from_value(value: Value) -> Result<Self, ConvertError> {
                match value {
                    $(Value::$variant(v) => Ok(v),)+
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

impl_from_value!(i32, "i32", Int32);
impl_from_value!(i64, "i64", Int64);
impl_from_value!(f32, "f32", Float32);
impl_from_value!(f64, "f64", Float64);
impl_from_value!(String, "String", Text);
impl_from_value!(bool, "bool", Boolean);
impl_from_value!(DateTime<Local>, "DateTime<Local>", Date | DateTime);
impl_from_value!(Vec<i32>, "Vec<i32>", Int32List);
impl_from_value!(Vec<i64>, "Vec<i64>", Int64List);
impl_from_value!(Vec<f32>, "Vec<f32>", Float32List);
impl_from_value!(Vec<f64>, "Vec<f64>", Float64List);
impl_from_value!(Vec<String>, "Vec<String>", TextList);
impl_from_value!(Vec<bool>, "Vec<bool>", BooleanList);
impl_from_value!(Vec<DateTime<Local>>, "Vec<DateTime<Local>>", DateList | DateTimeList);

impl FromValue for Value {
    const SHAPE: &'static str = "Value";

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

// An empty destination is filled rather than rejected.
impl<T: FromValue> FromValue for Option<T> {
    const SHAPE: &'static str = T::SHAPE;

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Some)
    }
}
