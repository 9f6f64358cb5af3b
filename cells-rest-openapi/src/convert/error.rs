use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Expected: {expected}, Found: {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Cannot read {value:?} as {expected}")]
    InvalidLiteral {
        expected: &'static str,
        value: String,
    },
    #[error("Value {value} is out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },
    #[error("Cannot build {model} from {found}, an object is required")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },
    #[error("Field {path:?}: {source}")]
    Field {
        path: String,
        #[source]
        source: Box<ConvertError>,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn mismatch(expected: &'static str, found: &Value) -> Self {
        ConvertError::TypeMismatch {
            expected,
            found: kind_of(found),
        }
    }

    /// Prefix the error with the key or index it was found under.
    pub fn at(self, segment: impl Display) -> Self {
        match self {
            ConvertError::Field { path, source } => ConvertError::Field {
                path: format!("{}.{}", segment, path),
                source,
            },
            other => ConvertError::Field {
                path: segment.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Dotted path of the offending field, if the error happened below the root.
    pub fn path(&self) -> Option<&str> {
        match self {
            ConvertError::Field { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The error without its field path.
    pub fn root_cause(&self) -> &ConvertError {
        match self {
            ConvertError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
