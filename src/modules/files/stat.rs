//! Existence checks that keep "absent" apart from "unknown"

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::modules::error::FileOpsError;
use crate::modules::logging::Logger;

/// Whether `path` exists, following symlinks.
///
/// Returns `Ok(false)` only when the path is confirmed absent. Any other
/// failure to stat the path (permission denied, a regular file used as a
/// directory, ...) is logged and returned.
pub async fn file_exists(path: impl AsRef<Path>, logger: &Logger) -> Result<bool, FileOpsError> {
    let path = path.as_ref();

    match fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => {
            logger.log_error(&source, format_args!("Error reading file {}", path.display()));
            Err(FileOpsError::Stat {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
