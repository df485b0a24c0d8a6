//! Validation error types

use std::fmt;

/// Validation error for submitted forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent or blank
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format (phone, link, timestamp)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value is not one of the accepted spellings
    InvalidValue { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidValue { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "city",
            max: 120,
        };
        assert_eq!(err.to_string(), "city exceeds maximum length of 120 characters");
        assert_eq!(
            ValidationError::Missing { field: "name" }.to_string(),
            "name is required"
        );
    }

    #[test]
    fn field_accessor() {
        let err = ValidationError::InvalidValue {
            field: "seeking_talent",
            value: "maybe".into(),
        };
        assert_eq!(err.field(), "seeking_talent");
    }
}
