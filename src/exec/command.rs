// src/exec/command.rs

//! Single external command execution.

use std::fmt;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{BuildtestError, Result};

/// One external command: program, arguments, optional working directory.
///
/// Built immediately before execution and never reused; there is no
/// cross-command state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Override the working directory the command runs in.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run `cmd` to completion as a child process.
///
/// The command is echoed to stdout as `[cmd] ...` before it runs, so a
/// failing step can be reproduced by hand. The child inherits stdin, stdout
/// and stderr; nothing is captured or parsed.
///
/// - exit code 0 → `Ok(())`
/// - non-zero exit → [`BuildtestError::StepFailed`] carrying that code
///   (`-1` when the child was killed by a signal)
/// - spawn error (program missing, not executable) →
///   [`BuildtestError::LaunchFailed`]
pub async fn run_command(cmd: &CommandLine) -> Result<()> {
    println!("[cmd] {cmd}");
    debug!(cmd = %cmd, cwd = ?cmd.cwd, "starting command");

    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);
    if let Some(dir) = &cmd.cwd {
        command.current_dir(dir);
    }

    // `status()` leaves the standard streams inherited, which is exactly
    // what we want: the child's output goes straight to the user.
    let status = command
        .status()
        .await
        .map_err(|source| BuildtestError::LaunchFailed {
            program: cmd.program.clone(),
            source,
        })?;

    if status.success() {
        debug!(cmd = %cmd, "command succeeded");
        return Ok(());
    }

    let code = status.code().unwrap_or(-1);
    debug!(cmd = %cmd, exit_code = code, "command failed");
    Err(BuildtestError::StepFailed {
        command: cmd.to_string(),
        code,
    })
}
