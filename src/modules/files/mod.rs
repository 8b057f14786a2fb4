//! File operation modules for repo-scaffold
//!
//! This module provides the file operations a scaffold run needs:
//! - Copying a template checkout into a destination
//! - Directory creation
//! - Existence checks
//! - Template rendering

pub mod copy;
pub mod dir;
pub mod stat;
pub mod template;

pub use copy::{copy_entry, copy_tree, is_ignored, IGNORED_PATHS};
pub use dir::ensure_dir;
pub use stat::file_exists;
pub use template::{render_template, Template};
