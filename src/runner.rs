use crate::config::ProcessOptions;
use crate::context::PipelineContext;
use crate::error::BatchError;
use crate::files::{FileRecord, Files};
use crate::processor::FileProcessor;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Batch stage: fans every file of the collection out to the processor,
/// waits for the whole set to settle and reconciles the outputs back in.
pub struct BatchRunner {
    processor: Arc<dyn FileProcessor>,
    options: ProcessOptions,
}

impl BatchRunner {
    pub fn new(processor: Arc<dyn FileProcessor>) -> Self {
        Self::with_options(processor, ProcessOptions::default())
    }

    pub fn with_options(processor: Arc<dyn FileProcessor>, options: ProcessOptions) -> Self {
        Self { processor, options }
    }

    /// Process every file currently in `files` concurrently and merge the
    /// results back in. All-or-nothing: if any file fails, the first error is
    /// returned and `files` receives no merges at all.
    pub async fn run(
        &mut self,
        files: &mut Files,
        context: &dyn PipelineContext,
    ) -> Result<(), BatchError> {
        // Snapshot the key set; merges below must not feed back into the batch.
        let names: Vec<String> = files.keys().cloned().collect();
        info!("processing batch of {} files", names.len());

        // One metadata fetch per run, shared by reference across the fan-out.
        self.options.metadata = Some(Arc::new(context.metadata().await));
        let options = Arc::new(self.options.clone());

        let mut in_flight = FuturesUnordered::new();
        for name in names {
            if let Some(record) = files.get_mut(&name) {
                record.source_name = Some(name);

                let job = record.clone();
                let processor = Arc::clone(&self.processor);
                let options = Arc::clone(&options);
                in_flight.push(async move { processor.process_file(job, &options).await });
            }
        }

        // Let every launched job settle; keep only the first failure.
        let mut outputs: Vec<HashMap<String, FileRecord>> = Vec::new();
        let mut failure = None;
        while let Some(result) = in_flight.next().await {
            match result {
                Ok(map) => outputs.push(map),
                Err(err) => {
                    debug!("file processing failed: {}", err);
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
            }
        }
        if let Some(err) = failure {
            return Err(BatchError::from(err));
        }

        // Reconcile in completion order: merge each result map, then drop the
        // originals it names as parents.
        for output in outputs {
            let parents: HashSet<String> = output
                .values()
                .filter_map(|record| record.parent_name.clone())
                .collect();
            for (name, record) in output {
                files.insert(name, record);
            }
            for parent in &parents {
                files.remove(parent);
            }
        }

        debug!("batch merged, {} files in collection", files.len());
        Ok(())
    }

    /// Completion-callback flavor of [`run`](Self::run) for hosts that hand
    /// the stage a `done` continuation: invoked exactly once, with the error
    /// on failure and nothing on success.
    pub async fn run_with_callback<F>(
        &mut self,
        files: &mut Files,
        context: &dyn PipelineContext,
        done: F,
    ) where
        F: FnOnce(Option<BatchError>),
    {
        done(self.run(files, context).await.err());
    }
}
