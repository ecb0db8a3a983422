use crate::config::ProcessOptions;
use crate::error::ProcessError;
use crate::files::FileRecord;
use async_trait::async_trait;
use std::collections::HashMap;

/// External per-file transformer: takes a tagged record plus the shared batch
/// options and returns its outputs as a map of file name -> record.
///
/// A result usually holds one entry under the input's own name. It may hold
/// several (the file was split) or none at all. Outputs that supersede their
/// input carry the input's name in `parent_name`. Implementations must not
/// rely on any ordering among the files of a batch and must not hold on to
/// the options beyond the call.
#[async_trait]
pub trait FileProcessor: Send + Sync {
    async fn process_file(
        &self,
        file: FileRecord,
        options: &ProcessOptions,
    ) -> Result<HashMap<String, FileRecord>, ProcessError>;
}
