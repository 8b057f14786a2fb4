use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main repo-scaffold CLI interface
#[derive(Debug, Parser)]
#[command(name = "repo-scaffold")]
#[command(about = "Scaffold repositories from a template checkout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct RepoScaffoldCli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy a template checkout into a directory, skipping .git, LICENSE and CONTRIBUTING.md
    Copy {
        /// Template checkout
        src: PathBuf,
        /// Destination directory, created if missing
        dst: PathBuf,
    },

    /// Create a directory and any missing parents
    Mkdir { path: PathBuf },

    /// Print whether a path exists
    Exists { path: PathBuf },

    /// Render a template file against JSON data
    Render {
        /// Template file
        template: PathBuf,
        /// JSON file holding the template data
        data: PathBuf,
    },

    /// Check that an auth token is available
    Token,
}
