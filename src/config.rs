use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Options shared by every `process_file` call of a batch.
///
/// `metadata` is reassigned by the runner on each invocation and shared by
/// reference across the whole fan-out. `extra` carries caller-supplied fields
/// through to the processor unmodified.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    pub metadata: Option<Arc<Value>>,
    pub extra: HashMap<String, Value>,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
