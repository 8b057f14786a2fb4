//! Copy module for populating a destination from a template checkout

use std::ffi::{OsStr, OsString};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::modules::error::FileOpsError;
use crate::modules::logging::Logger;

use super::dir::ensure_dir;

/// Top-level entries of a template checkout that never get copied.
pub const IGNORED_PATHS: [&str; 3] = [".git", "CONTRIBUTING.md", "LICENSE"];

pub fn is_ignored(name: &OsStr) -> bool {
    IGNORED_PATHS.iter().any(|ignored| name == OsStr::new(ignored))
}

/// Copy the contents of `src` into `dst`, skipping [`IGNORED_PATHS`].
///
/// `dst` is created if needed. Entries are copied in name order and the
/// first failure aborts the copy; entries already copied are left in place.
/// A `dst` that is `src` itself, or lives inside it, is rejected before
/// anything is copied.
pub async fn copy_tree(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    logger: &Logger,
) -> Result<(), FileOpsError> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    logger.debug(format_args!("Copying {} into {}", src.display(), dst.display()));

    ensure_dir(dst, logger)
        .await
        .inspect_err(|e| logger.log_error(e, "Error creating destination folder"))?;

    let names = list_entries(src).await.inspect_err(|e| {
        logger.log_error(e, format_args!("Error reading files of {}", src.display()))
    })?;

    check_not_nested(src, dst).await.inspect_err(|e| {
        logger.log_error(e, format_args!("Error copying {}", src.display()))
    })?;

    for name in names.iter().filter(|name| !is_ignored(name)) {
        copy_entry(src.join(name), dst.join(name), logger)
            .await
            .inspect_err(|e| {
                logger.log_error(e, format_args!("Error copying {}", name.to_string_lossy()))
            })?;
    }

    Ok(())
}

/// Copy a single file, directory or symlink from `src` to `dst`.
///
/// Files overwrite an existing destination file, and an existing symlink at
/// the destination is replaced rather than written through. Directories
/// merge into an existing destination directory. Copying a file onto a
/// directory, or a directory onto a file, fails with
/// [`FileOpsError::KindMismatch`]. Copying an entry onto itself, or a
/// directory into its own subtree, fails before anything is written.
pub async fn copy_entry(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    logger: &Logger,
) -> Result<(), FileOpsError> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if matches!(fs::symlink_metadata(src).await, Ok(metadata) if metadata.is_dir()) {
        check_not_nested(src, dst).await?;
    }

    copy_path(src, dst, logger).await
}

async fn copy_path(src: &Path, dst: &Path, logger: &Logger) -> Result<(), FileOpsError> {
    logger.debug(format_args!("Copying {} into {}", src.display(), dst.display()));

    let metadata = fs::symlink_metadata(src)
        .await
        .map_err(|source| FileOpsError::Stat {
            path: src.to_path_buf(),
            source,
        })?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        copy_symlink(src, dst).await
    } else if file_type.is_dir() {
        copy_dir(src, dst, logger).await
    } else {
        copy_file(src, dst).await
    }
}

async fn copy_dir(src: &Path, dst: &Path, logger: &Logger) -> Result<(), FileOpsError> {
    match existing_kind(dst).await? {
        Some(EntryKind::Directory) => ensure_distinct(src, dst).await?,
        Some(kind) => {
            return Err(FileOpsError::KindMismatch {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                found: kind.describe(),
            })
        }
        None => fs::create_dir(dst)
            .await
            .map_err(|source| FileOpsError::CreateDir {
                path: dst.to_path_buf(),
                source,
            })?,
    }

    for name in list_entries(src).await? {
        Box::pin(copy_path(&src.join(&name), &dst.join(&name), logger)).await?;
    }

    Ok(())
}

async fn copy_file(src: &Path, dst: &Path) -> Result<(), FileOpsError> {
    match existing_kind(dst).await? {
        Some(EntryKind::Directory) => {
            return Err(FileOpsError::KindMismatch {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                found: "directory",
            })
        }
        Some(EntryKind::Symlink) => {
            fs::remove_file(dst)
                .await
                .map_err(|source| FileOpsError::CopyEntry {
                    src: src.to_path_buf(),
                    dst: dst.to_path_buf(),
                    source,
                })?
        }
        Some(EntryKind::File) => ensure_distinct(src, dst).await?,
        None => {}
    }

    fs::copy(src, dst)
        .await
        .map_err(|source| FileOpsError::CopyEntry {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source,
        })?;

    Ok(())
}

#[cfg(unix)]
async fn copy_symlink(src: &Path, dst: &Path) -> Result<(), FileOpsError> {
    let copy_error = |source| FileOpsError::CopyEntry {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    let target = fs::read_link(src).await.map_err(copy_error)?;

    match existing_kind(dst).await? {
        Some(EntryKind::Directory) => {
            return Err(FileOpsError::KindMismatch {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                found: "directory",
            })
        }
        Some(_) => {
            ensure_distinct(src, dst).await?;
            fs::remove_file(dst).await.map_err(copy_error)?
        }
        None => {}
    }

    fs::symlink(target, dst).await.map_err(copy_error)
}

#[cfg(not(unix))]
async fn copy_symlink(src: &Path, dst: &Path) -> Result<(), FileOpsError> {
    copy_file(src, dst).await
}

enum EntryKind {
    Directory,
    Symlink,
    File,
}

impl EntryKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::File => "file",
        }
    }
}

/// What already sits at `path`, without following a trailing symlink.
async fn existing_kind(path: &Path) -> Result<Option<EntryKind>, FileOpsError> {
    match fs::symlink_metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(Some(EntryKind::Directory)),
        Ok(metadata) if metadata.file_type().is_symlink() => Ok(Some(EntryKind::Symlink)),
        Ok(_) => Ok(Some(EntryKind::File)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(FileOpsError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Fail with [`FileOpsError::SameFile`] when `src` and an existing `dst` are
/// one filesystem entry, hard links included.
async fn ensure_distinct(src: &Path, dst: &Path) -> Result<(), FileOpsError> {
    if same_entry(src, dst).await? {
        return Err(FileOpsError::SameFile {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(unix)]
async fn same_entry(src: &Path, dst: &Path) -> Result<bool, FileOpsError> {
    use std::os::unix::fs::MetadataExt;

    let src_metadata = stat_entry(src).await?;
    let dst_metadata = stat_entry(dst).await?;
    Ok(src_metadata.dev() == dst_metadata.dev() && src_metadata.ino() == dst_metadata.ino())
}

#[cfg(unix)]
async fn stat_entry(path: &Path) -> Result<std::fs::Metadata, FileOpsError> {
    fs::symlink_metadata(path).await.map_err(stat_error(path))
}

#[cfg(not(unix))]
async fn same_entry(src: &Path, dst: &Path) -> Result<bool, FileOpsError> {
    let src_resolved = resolve(src).await.map_err(stat_error(src))?;
    let dst_resolved = resolve(dst).await.map_err(stat_error(dst))?;
    Ok(src_resolved == dst_resolved)
}

/// Reject a directory copy whose destination is the source or sits below it.
async fn check_not_nested(src: &Path, dst: &Path) -> Result<(), FileOpsError> {
    let src_resolved = fs::canonicalize(src).await.map_err(stat_error(src))?;
    let dst_resolved = resolve(dst).await.map_err(stat_error(dst))?;

    if dst_resolved == src_resolved {
        Err(FileOpsError::SameFile {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        })
    } else if dst_resolved.starts_with(&src_resolved) {
        Err(FileOpsError::CopyIntoSelf {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

fn stat_error(path: &Path) -> impl FnOnce(io::Error) -> FileOpsError {
    let path = path.to_path_buf();
    move |source| FileOpsError::Stat { path, source }
}

/// Canonicalize `path`, allowing trailing components that do not exist yet.
async fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut missing: Vec<OsString> = Vec::new();
    let mut current = path;

    loop {
        match fs::canonicalize(current).await {
            Ok(resolved) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(resolved, |resolved, name| resolved.join(name)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (current.parent(), current.file_name()) else {
                    return Err(e);
                };
                missing.push(name.to_os_string());
                current = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            Err(e) => return Err(e),
        }
    }
}

/// Names of the immediate entries of `dir`, sorted.
async fn list_entries(dir: &Path) -> Result<Vec<OsString>, FileOpsError> {
    let read_error = |source| FileOpsError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        names.push(entry.file_name());
    }
    names.sort();

    Ok(names)
}
