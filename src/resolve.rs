// src/resolve.rs

//! Locate the pingstats executable inside the build tree.
//!
//! Where the binary ends up depends on the generator: multi-config
//! generators (Visual Studio, Xcode) nest it under a per-configuration
//! subdirectory, single-config generators (Makefiles, Ninja) drop it
//! directly into the build directory, and Windows toolchains append `.exe`.
//! Resolution probes all four layouts in a fixed order, most specific
//! first, and takes the first path that exists.

use std::path::{Path, PathBuf};

use crate::cli::BuildConfig;

/// Base name of the executable produced by the build.
pub const PINGSTATS_BIN: &str = "pingstats";

/// Suffixed candidates are checked on every platform, not just Windows, so
/// a build tree produced by a cross-toolchain still resolves. On Unix hosts
/// they simply never exist and the bare candidates win.
const EXE_SUFFIX: &str = ".exe";

/// Candidate locations for `base_name`, in search order.
pub fn candidate_paths(
    build_dir: &Path,
    config: BuildConfig,
    base_name: &str,
) -> Vec<PathBuf> {
    let suffixed = format!("{base_name}{EXE_SUFFIX}");
    vec![
        build_dir.join(config.as_str()).join(&suffixed),
        build_dir.join(&suffixed),
        build_dir.join(config.as_str()).join(base_name),
        build_dir.join(base_name),
    ]
}

/// Return the first candidate path that exists, or `None` when the target
/// was never built.
///
/// Pure filesystem query: nothing is created, modified or deleted, and
/// later candidates are not checked once one matches.
pub fn resolve_executable(
    build_dir: &Path,
    config: BuildConfig,
    base_name: &str,
) -> Option<PathBuf> {
    candidate_paths(build_dir, config, base_name)
        .into_iter()
        .find(|candidate| candidate.exists())
}
