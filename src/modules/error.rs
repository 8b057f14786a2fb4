use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during filesystem operations
#[derive(Error, Debug)]
pub enum FileOpsError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {src} to {dst}: {source}")]
    CopyEntry {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{src} and {dst} are the same file")]
    SameFile { src: PathBuf, dst: PathBuf },

    #[error("Cannot copy directory {src} into itself at {dst}")]
    CopyIntoSelf { src: PathBuf, dst: PathBuf },

    #[error("Cannot copy {src} onto {dst}: destination is a {found}")]
    KindMismatch {
        src: PathBuf,
        dst: PathBuf,
        found: &'static str,
    },
}

impl FileOpsError {
    /// The underlying I/O error, if there is one.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::CreateDir { source, .. }
            | Self::ReadDir { source, .. }
            | Self::CopyEntry { source, .. }
            | Self::Stat { source, .. } => Some(source),
            Self::SameFile { .. } | Self::CopyIntoSelf { .. } | Self::KindMismatch { .. } => None,
        }
    }
}

/// Errors that can occur while parsing or rendering templates
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to parse template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Errors that can occur while resolving credentials
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please export ${var} with a personal token and try again. Exiting")]
    MissingToken { var: &'static str },
}
