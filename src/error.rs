use serde_json::Value;
use thiserror::Error;

/// Failure raised by a [`FileProcessor`](crate::FileProcessor) for one file.
/// `details` is an optional structured payload that gets rendered into the
/// batch error for diagnosis.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProcessError {
    pub message: String,
    pub details: Option<Value>,
}

impl ProcessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            details: Some(details),
        }
    }
}

/// First per-file failure of a batch, surfaced to the pipeline host with the
/// processor's `details` pretty-printed into the message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BatchError {
    message: String,
    #[source]
    source: ProcessError,
}

impl BatchError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ProcessError> for BatchError {
    fn from(err: ProcessError) -> Self {
        let details = match &err.details {
            Some(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            None => String::new(),
        };
        Self {
            message: format!("{}\n{}", err.message, details),
            source: err,
        }
    }
}
