use async_trait::async_trait;
use serde_json::Value;

/// Host-side provider of the shared batch metadata; queried once per run.
#[async_trait]
pub trait PipelineContext: Send + Sync {
    async fn metadata(&self) -> Value;
}

/// Context returning a fixed metadata value.
pub struct StaticContext {
    metadata: Value,
}

impl StaticContext {
    pub fn new(metadata: Value) -> Self {
        Self { metadata }
    }
}

#[async_trait]
impl PipelineContext for StaticContext {
    async fn metadata(&self) -> Value {
        self.metadata.clone()
    }
}
