//! Test suite for the scaffold file operations
//!
//! - Integration tests against real temp directories
//! - Property-based tests for the copy invariants
//! - End-to-end scaffold workflow


pub use helpers::{assertions::*, environment::TestEnvironment};
