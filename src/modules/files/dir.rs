//! Directory creation

use std::path::Path;
use tokio::fs;

use crate::modules::error::FileOpsError;
use crate::modules::logging::Logger;

/// Create `path` along with any missing parents.
///
/// An existing directory is left untouched. An existing non-directory at
/// `path` is an error.
pub async fn ensure_dir(path: impl AsRef<Path>, logger: &Logger) -> Result<(), FileOpsError> {
    let path = path.as_ref();
    logger.debug(format_args!("Creating {}", path.display()));

    fs::create_dir_all(path)
        .await
        .map_err(|source| FileOpsError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}
