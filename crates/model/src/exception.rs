//! Error descriptions exchanged with the server.
//!
//! An [`Exception`] describes a failure after the fact: what kind of error it was, a message, a
//! free-form detail payload and, optionally, the exception that caused it. It is a value to be
//! serialised and displayed, not a Rust error type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    /// Error type name, e.g. `"NotFoundException"`.
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Free-form payload; any JSON value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<Box<Exception>>,
}

impl Exception {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: Some(error_type.into()),
            message: Some(message.into()),
            details: None,
            caused_by: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_cause(mut self, cause: Exception) -> Self {
        self.caused_by = Some(Box::new(cause));
        self
    }

    /// Iterates the cause chain, starting with the immediate cause.
    pub fn causes(&self) -> Causes<'_> {
        Causes {
            next: self.caused_by.as_deref(),
        }
    }

    /// The last exception in the chain (`self` if there is no cause).
    pub fn root_cause(&self) -> &Exception {
        self.causes().last().unwrap_or(self)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error_type, &self.message) {
            (Some(error_type), Some(message)) => write!(f, "{error_type}: {message}"),
            (Some(error_type), None) => f.write_str(error_type),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unspecified error"),
        }
    }
}

/// Iterator over an exception's causes.
pub struct Causes<'a> {
    next: Option<&'a Exception>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Exception;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.caused_by.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chain() -> Exception {
        Exception::new("DataPersistenceException", "could not save patient")
            .with_details(json!({ "key": "X" }))
            .with_cause(
                Exception::new("DbException", "constraint violated")
                    .with_cause(Exception::new("SocketException", "connection reset")),
            )
    }

    #[test]
    fn empty_exception_has_nothing_set() {
        let empty = Exception::default();
        assert!(empty.error_type.is_none());
        assert!(empty.message.is_none());
        assert!(empty.details.is_none());
        assert!(empty.caused_by.is_none());
        assert_eq!(serde_json::to_value(&empty).expect("serialise"), json!({}));
    }

    #[test]
    fn walks_the_cause_chain() {
        let error = chain();
        let types: Vec<_> = error
            .causes()
            .filter_map(|e| e.error_type.as_deref())
            .collect();
        assert_eq!(types, vec!["DbException", "SocketException"]);
        assert_eq!(error.root_cause().message.as_deref(), Some("connection reset"));
    }

    #[test]
    fn root_cause_of_a_single_exception_is_itself() {
        let error = Exception::new("X", "y");
        assert_eq!(error.root_cause(), &error);
    }

    #[test]
    fn wire_shape() {
        let value = serde_json::to_value(chain()).expect("serialise");
        assert_eq!(value["$type"], "DataPersistenceException");
        assert_eq!(value["details"]["key"], "X");
        assert_eq!(value["caused_by"]["$type"], "DbException");
        assert_eq!(value["caused_by"]["caused_by"]["message"], "connection reset");

        let back: Exception = serde_json::from_value(value).expect("deserialise");
        assert_eq!(back, chain());
    }

    #[test]
    fn displays_type_and_message() {
        assert_eq!(
            chain().to_string(),
            "DataPersistenceException: could not save patient"
        );
        assert_eq!(Exception::default().to_string(), "unspecified error");
    }
}
