// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod resolve;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::{BuildConfig, CliArgs};
use crate::errors::{BuildtestError, Result};
use crate::exec::{CommandBackend, CommandLine, ProcessBackend};
use crate::resolve::{resolve_executable, PINGSTATS_BIN};

/// High-level entry point used by `main.rs`.
///
/// Runs the full pipeline against the real process backend:
/// - configure the build tree with CMake
/// - build the requested configuration
/// - run ctest
/// - (only when hosts were given) locate and run pingstats
pub async fn run(args: CliArgs) -> Result<()> {
    let mut backend = ProcessBackend;
    run_pipeline(&args, &mut backend).await
}

/// Drive the configure → build → test pipeline against `backend`, then run
/// pingstats over `args.hosts` when any were given.
///
/// Steps run strictly in order; the first failure aborts everything after
/// it. The backend is a parameter so tests can substitute a fake runner and
/// observe exactly which commands would have been spawned.
pub async fn run_pipeline<B: CommandBackend>(args: &CliArgs, backend: &mut B) -> Result<()> {
    // The configure step tolerates an existing build directory, so this is
    // idempotent across runs.
    fs::create_dir_all(&args.build_dir)?;

    backend.run_command(configure_command(&args.build_dir)).await?;
    backend
        .run_command(build_command(&args.build_dir, args.config))
        .await?;
    backend
        .run_command(test_command(&args.build_dir, args.config))
        .await?;

    if !args.hosts.is_empty() {
        let exe = resolve_executable(&args.build_dir, args.config, PINGSTATS_BIN).ok_or_else(
            || BuildtestError::ExecutableNotFound {
                dir: args.build_dir.clone(),
            },
        )?;
        debug!(exe = %exe.display(), "resolved pingstats executable");
        backend.run_command(pingstats_command(&exe, &args.hosts)).await?;
    }

    Ok(())
}

/// `cmake -S . -B <build_dir>`: (re)generate the build system in
/// `build_dir` from the sources in the current directory. Generator and
/// toolchain selection are left to CMake.
pub fn configure_command(build_dir: &Path) -> CommandLine {
    let build_dir = build_dir.display().to_string();
    CommandLine::new("cmake", ["-S", ".", "-B", build_dir.as_str()])
}

/// `cmake --build <build_dir> --config <config>`: compile and link.
/// Multi-config generators honour `--config`; single-config generators
/// ignore it.
pub fn build_command(build_dir: &Path, config: BuildConfig) -> CommandLine {
    let build_dir = build_dir.display().to_string();
    CommandLine::new(
        "cmake",
        ["--build", build_dir.as_str(), "--config", config.as_str()],
    )
}

/// `ctest --test-dir <build_dir> --build-config <config>
/// --output-on-failure`: run the test suite, printing full output for any
/// failing test.
pub fn test_command(build_dir: &Path, config: BuildConfig) -> CommandLine {
    let build_dir = build_dir.display().to_string();
    CommandLine::new(
        "ctest",
        [
            "--test-dir",
            build_dir.as_str(),
            "--build-config",
            config.as_str(),
            "--output-on-failure",
        ],
    )
}

/// Run the resolved pingstats executable with `hosts` as its argument list,
/// in their original order.
pub fn pingstats_command(exe: &Path, hosts: &[String]) -> CommandLine {
    CommandLine::new(exe.display().to_string(), hosts.iter().cloned())
}
