//! Diagnostic output for file operations
//!
//! Every helper in this crate reports through a [`Logger`] handed in by the
//! caller. The logger carries the verbosity setting, so two callers in the
//! same process can run with different settings. Lines end up on stderr via
//! `tracing`.

use std::fmt;
use tracing::Level;

/// Three-level logging facade: plain lines, error lines and debug lines.
///
/// Lines are `tracing` events, so they only reach stderr once a subscriber
/// is installed. The binary does that with [`init_tracing`]; a library caller
/// that never installs one gets no output from `log` or `log_error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Logger that only emits debug lines when asked to be verbose.
    pub fn quiet() -> Self {
        Self::new(false)
    }

    pub fn verbose() -> Self {
        Self::new(true)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Write a line unconditionally.
    pub fn log(&self, message: impl fmt::Display) {
        tracing::info!("{message}");
    }

    /// Write a line followed by the error's message.
    pub fn log_error(&self, error: &impl fmt::Display, message: impl fmt::Display) {
        tracing::error!("{message}: {error}");
    }

    /// Write a line only when verbose.
    pub fn debug(&self, message: impl fmt::Display) {
        if self.verbose {
            tracing::debug!("{message}");
        }
    }
}

/// Install the stderr subscriber used by the binary.
///
/// Lines carry no timestamp, level or target so they read as plain
/// diagnostics. Calling this more than once keeps the first subscriber.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .try_init();
}
