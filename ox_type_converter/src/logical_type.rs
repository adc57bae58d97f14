use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical target type a type name resolves to.
///
/// Every scalar type has exactly one list counterpart holding a
/// separator-delimited sequence of that scalar. `Unknown` is the sentinel
/// returned for names the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalType {
    Unknown,

    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    Boolean,
    Date,
    DateTime,

    Int32List,
    Int64List,
    Float32List,
    Float64List,
    TextList,
    BooleanList,
    DateList,
    DateTimeList,
}

impl LogicalType {
    /// All scalar types, in declaration order.
    pub const SCALARS: [LogicalType; 8] = [
        LogicalType::Int32,
        LogicalType::Int64,
        LogicalType::Float32,
        LogicalType::Float64,
        LogicalType::Text,
        LogicalType::Boolean,
        LogicalType::Date,
        LogicalType::DateTime,
    ];

    pub fn is_list(self) -> bool {
        self.element().is_some()
    }

    pub fn is_scalar(self) -> bool {
        self.list_of().is_some()
    }

    /// Element type of a list type, `None` for scalars and `Unknown`.
    pub fn element(self) -> Option<LogicalType> {
        match self {
            LogicalType::Int32List => Some(LogicalType::Int32),
            LogicalType::Int64List => Some(LogicalType::Int64),
            LogicalType::Float32List => Some(LogicalType::Float32),
            LogicalType::Float64List => Some(LogicalType::Float64),
            LogicalType::TextList => Some(LogicalType::Text),
            LogicalType::BooleanList => Some(LogicalType::Boolean),
            LogicalType::DateList => Some(LogicalType::Date),
            LogicalType::DateTimeList => Some(LogicalType::DateTime),
            _ => None,
        }
    }

    /// List type holding elements of this scalar, `None` for lists and `Unknown`.
    pub fn list_of(self) -> Option<LogicalType> {
        match self {
            LogicalType::Int32 => Some(LogicalType::Int32List),
            LogicalType::Int64 => Some(LogicalType::Int64List),
            LogicalType::Float32 => Some(LogicalType::Float32List),
            LogicalType::Float64 => Some(LogicalType::Float64List),
            LogicalType::Text => Some(LogicalType::TextList),
            LogicalType::Boolean => Some(LogicalType::BooleanList),
            LogicalType::Date => Some(LogicalType::DateList),
            LogicalType::DateTime => Some(LogicalType::DateTimeList),
            _ => None,
        }
    }

    /// Canonical name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalType::Unknown => "unknown",
            LogicalType::Int32 => "int32",
            LogicalType::Int64 => "int64",
            LogicalType::Float32 => "float32",
            LogicalType::Float64 => "float64",
            LogicalType::Text => "text",
            LogicalType::Boolean => "boolean",
            LogicalType::Date => "date",
            LogicalType::DateTime => "date_time",
            LogicalType::Int32List => "int32_list",
            LogicalType::Int64List => "int64_list",
            LogicalType::Float32List => "float32_list",
            LogicalType::Float64List => "float64_list",
            LogicalType::TextList => "text_list",
            LogicalType::BooleanList => "boolean_list",
            LogicalType::DateList => "date_list",
            LogicalType::DateTimeList => "date_time_list",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
