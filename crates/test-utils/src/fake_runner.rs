use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use buildtest::errors::{BuildtestError, Result};
use buildtest::exec::{CommandBackend, CommandLine};

/// A fake command backend that:
/// - records every command it is asked to run
/// - succeeds by default, or fails one chosen command with a fixed exit code.
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<CommandLine>>>,
    fail_at: Option<(usize, i32)>,
}

impl FakeRunner {
    pub fn new(executed: Arc<Mutex<Vec<CommandLine>>>) -> Self {
        Self {
            executed,
            fail_at: None,
        }
    }

    /// Fail the `index`-th command (0-based) with `code`.
    ///
    /// Earlier commands succeed; later commands should never be issued,
    /// since the pipeline is fail-fast.
    pub fn fail_at(mut self, index: usize, code: i32) -> Self {
        self.fail_at = Some((index, code));
        self
    }
}

impl CommandBackend for FakeRunner {
    fn run_command(
        &mut self,
        cmd: CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let executed = Arc::clone(&self.executed);
        let fail_at = self.fail_at;

        Box::pin(async move {
            let index = {
                let mut guard = executed.lock().unwrap();
                guard.push(cmd.clone());
                guard.len() - 1
            };

            match fail_at {
                Some((at, code)) if at == index => Err(BuildtestError::StepFailed {
                    command: cmd.to_string(),
                    code,
                }),
                _ => Ok(()),
            }
        })
    }
}
