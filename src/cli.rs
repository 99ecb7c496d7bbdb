// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `buildtest`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buildtest",
    version,
    about = "Configure, build, and run ctest; optionally run pingstats.",
    long_about = None
)]
pub struct CliArgs {
    /// CMake configuration to build and test.
    #[arg(
        short = 'c',
        long = "config",
        value_enum,
        value_name = "CONFIG",
        default_value_t = BuildConfig::Debug
    )]
    pub config: BuildConfig,

    /// Build directory handed to CMake and ctest.
    #[arg(short = 'b', long = "build-dir", value_name = "PATH", default_value = "build")]
    pub build_dir: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDTEST_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Hosts to run with pingstats after the tests pass.
    ///
    /// Forwarded verbatim, in order. When empty, the run stops after ctest.
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,
}

/// CMake build configuration.
///
/// The value names are the exact spellings CMake expects for `--config` /
/// `--build-config`, so no case mapping happens between parsing and the
/// generated command lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BuildConfig {
    #[value(name = "Debug")]
    Debug,
    #[value(name = "Release")]
    Release,
}

impl BuildConfig {
    /// Spelling used on CMake/ctest command lines and as the per-config
    /// subdirectory name of multi-config generators.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildConfig::Debug => "Debug",
            BuildConfig::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
