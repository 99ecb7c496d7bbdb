// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external commands of
//! the pipeline, using `tokio::process::Command` with inherited stdio.
//!
//! - [`command`] owns the [`CommandLine`] value type and the real
//!   child-process runner.
//! - [`backend`] abstracts the runner behind the [`CommandBackend`] trait so
//!   tests can substitute a fake that records commands instead of spawning
//!   processes.

pub mod backend;
pub mod command;

pub use backend::{CommandBackend, ProcessBackend};
pub use command::{run_command, CommandLine};
