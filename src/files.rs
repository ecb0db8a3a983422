use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// File map handed to the stage by the pipeline host: file name -> record.
pub type Files = HashMap<String, FileRecord>;

/// A virtual file travelling through the pipeline.
///
/// `source_name` is written by the runner before fan-out so the processor
/// knows which key the record lived under. `parent_name` is set by the
/// processor on derived outputs and marks the original key for removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub contents: String,
    /// Open extension map for host- and processor-defined fields.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

impl FileRecord {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Output record derived from `parent`; the runner removes the parent key
    /// once this record is merged.
    pub fn derived_from(contents: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            parent_name: Some(parent.into()),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}
