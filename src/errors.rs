// src/errors.rs

//! Crate-wide error types.
//!
//! Every failure is fatal to the whole run; the only question is which exit
//! code the process terminates with. [`BuildtestError::exit_code`] is the
//! single place that mapping lives.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildtestError {
    /// An external step ran to completion but exited non-zero. The stored
    /// code is the child's own exit code and becomes the run's exit code.
    #[error("command `{command}` exited with code {code}")]
    StepFailed { command: String, code: i32 },

    /// An external tool could not be started at all (missing from the
    /// system, not executable). Distinct from [`StepFailed`] so the message
    /// reads as an environment problem rather than a build/test failure.
    ///
    /// [`StepFailed`]: BuildtestError::StepFailed
    #[error("failed to launch `{program}`: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// No candidate path for the pingstats executable exists. Expected when
    /// the target was never built; reported with the directory that was
    /// searched.
    #[error("pingstats executable not found in {}", dir.display())]
    ExecutableNotFound { dir: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildtestError {
    /// Process exit code for this failure.
    ///
    /// A failed step propagates the child's exact code; everything else
    /// (launch failure, missing pingstats, IO) terminates with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildtestError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BuildtestError>;
