use thiserror::Error;

use crate::logical_type::LogicalType;

/// Errors returned by [`Converter`](crate::Converter) operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The type name did not resolve to any registered type.
    #[error("type '{type_name}' is unknown, no alias matches")]
    UnsupportedType { type_name: String },

    /// The type resolved but the raw text could not be parsed into it.
    /// `index` is set when the failing piece was a list element.
    #[error("failed to convert {value:?} to {target}{}: {reason}", element_suffix(.index))]
    ConversionFailed {
        target: LogicalType,
        value: String,
        index: Option<usize>,
        reason: String,
    },

    /// The converted value does not fit the destination.
    #[error("cannot assign {found} value to a {expected} destination")]
    ShapeMismatch {
        expected: &'static str,
        found: LogicalType,
    },
}

fn element_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (element {})", i),
        None => String::new(),
    }
}

impl ConvertError {
    pub(crate) fn failed(target: LogicalType, value: &str, reason: impl ToString) -> Self {
        ConvertError::ConversionFailed {
            target,
            value: value.to_string(),
            index: None,
            reason: reason.to_string(),
        }
    }

    /// Attach the position of a failing list element.
    pub(crate) fn at_index(self, position: usize) -> Self {
        match self {
            ConvertError::ConversionFailed { target, value, reason, .. } => ConvertError::ConversionFailed {
                target,
                value,
                index: Some(position),
                reason,
            },
            other => other,
        }
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, ConvertError::UnsupportedType { .. })
    }

    pub fn is_conversion_failed(&self) -> bool {
        matches!(self, ConvertError::ConversionFailed { .. })
    }
}
