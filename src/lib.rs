//! TaskLoom library
//!
//! Todo storage, the interactive shell and their configuration, exported
//! for the binary and for integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod shell;
pub mod types;
