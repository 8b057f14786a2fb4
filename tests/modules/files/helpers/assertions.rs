//! Custom assertions for file operations testing

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Assert that a file exists
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(path.exists(), "File does not exist: {}", path.display());
}

/// Assert that a file does not exist
pub fn assert_file_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        std::fs::symlink_metadata(path).is_err(),
        "File should not exist: {}",
        path.display()
    );
}

/// Assert that a file contains expected content
pub fn assert_file_content<P: AsRef<Path>>(path: P, expected_content: &str) -> Result<()> {
    let path = path.as_ref();
    let actual_content = std::fs::read_to_string(path)?;
    assert_eq!(
        actual_content,
        expected_content,
        "File content mismatch in {}",
        path.display()
    );
    Ok(())
}

/// Assert that a directory exists and has no entries
pub fn assert_dir_empty<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    assert!(path.is_dir(), "Not a directory: {}", path.display());
    let count = std::fs::read_dir(path)?.count();
    assert_eq!(count, 0, "Directory is not empty: {}", path.display());
    Ok(())
}

/// Every entry below `root`, relative to it, directories included
pub fn relative_entries<P: AsRef<Path>>(root: P) -> BTreeSet<PathBuf> {
    let root = root.as_ref();
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .expect("Failed to walk directory")
                .path()
                .strip_prefix(root)
                .expect("Walked outside of root")
                .to_path_buf()
        })
        .collect()
}

/// Assert that two files have identical bytes
pub fn assert_files_equal<P: AsRef<Path>, Q: AsRef<Path>>(left: P, right: Q) -> Result<()> {
    let (left, right) = (left.as_ref(), right.as_ref());
    assert_eq!(
        std::fs::read(left)?,
        std::fs::read(right)?,
        "Files differ: {} and {}",
        left.display(),
        right.display()
    );
    Ok(())
}
