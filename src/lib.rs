//! Repo Scaffold - helpers for scaffolding repositories
//!
//! This crate provides the filesystem, templating and credential helpers used
//! to populate a new repository from a template checkout.

pub mod cli;
pub mod modules;

pub use modules::files::{
    copy_entry, copy_tree, ensure_dir, file_exists, render_template, Template, IGNORED_PATHS,
};
pub use modules::{require_auth_token, AuthError, FileOpsError, Logger, TemplateError};
