// src/exec/backend.rs

//! Pluggable command-runner backend abstraction.
//!
//! The pipeline talks to a `CommandBackend` instead of spawning processes
//! directly. This makes it easy to swap in a fake runner in tests while
//! keeping the production runner implementation in [`command`].
//!
//! - `ProcessBackend` is the default implementation used by `buildtest`.
//!   It runs each command as a real child process via [`run_command`].
//! - Tests can provide their own `CommandBackend` that, for example, records
//!   which commands were issued and succeeds or fails on demand.
//!
//! [`command`]: super::command
//! [`run_command`]: super::command::run_command

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::command::{run_command, CommandLine};

/// Trait abstracting how pipeline commands are executed.
///
/// Production code uses [`ProcessBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandBackend: Send {
    /// Run one command to completion.
    ///
    /// An `Err` means the whole run is over: either the command exited
    /// non-zero or it could not be started. Implementations must not retry.
    fn run_command(
        &mut self,
        cmd: CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real command backend used in production.
///
/// Each command becomes one blocking child-process invocation with
/// inherited stdio; the pipeline suspends until the child terminates.
pub struct ProcessBackend;

impl CommandBackend for ProcessBackend {
    fn run_command(
        &mut self,
        cmd: CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move { run_command(&cmd).await })
    }
}
