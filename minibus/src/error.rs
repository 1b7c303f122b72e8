use std::sync::Arc;

use crate::EventName;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot publish unregistered event '{0}'.")]
    UnknownEvent(EventName),

    #[error("Payload field '{0}' not found.")]
    FieldNotFound(String),

    #[error("Payload field '{field}' is not a {expected}.")]
    FieldType { field: String, expected: &'static str },

    #[error("Handler for '{event}' failed: {source}")]
    HandlerFailure {
        event: EventName,
        #[source]
        source: Box<Error>,
    },

    #[error("{} handler(s) failed during dispatch of '{event}'.", .errors.len())]
    AggregateFailure {
        event: EventName,
        errors: Vec<Error>,
    },

    #[error("Typed event must serialize to a JSON object, got {0}.")]
    PayloadShape(&'static str),

    #[error("Payload codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Error external to minibus occured: {0}")]
    External(Arc<str>),
}

impl Error {
    /// Wrap an application-level failure raised inside a handler.
    pub fn external(msg: impl AsRef<str>) -> Self {
        Error::External(Arc::from(msg.as_ref()))
    }

    /// The field name carried by `FieldNotFound` / `FieldType`, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::FieldNotFound(field) => Some(field),
            Error::FieldType { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_failure_preserves_source() {
        let err = Error::HandlerFailure {
            event: EventName::from("Checkout"),
            source: Box::new(Error::external("card declined")),
        };
        assert!(err.to_string().contains("Checkout"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_aggregate_failure_counts() {
        let err = Error::AggregateFailure {
            event: EventName::from("Checkout"),
            errors: vec![Error::external("a"), Error::external("b")],
        };
        assert!(err.to_string().starts_with("2 handler(s)"));
    }
}
