//! Concurrent batch file-processing stage for static-site pipelines.
//!
//! The stage takes the host's virtual-file map, runs every file through an
//! external [`FileProcessor`] concurrently and merges the outputs back in,
//! removing originals that were superseded by derived files. One failing
//! file fails the whole batch and no partial results are applied.

mod config;
mod context;
mod error;
mod files;
mod processor;
mod runner;

pub use config::ProcessOptions;
pub use context::{PipelineContext, StaticContext};
pub use error::{BatchError, ProcessError};
pub use files::{FileRecord, Files};
pub use processor::FileProcessor;
pub use runner::BatchRunner;
