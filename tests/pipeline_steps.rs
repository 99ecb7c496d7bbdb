// tests/pipeline_steps.rs

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use buildtest::cli::{BuildConfig, CliArgs};
use buildtest::exec::CommandLine;
use buildtest::{build_command, configure_command, run_pipeline, test_command};
use buildtest_test_utils::fake_runner::FakeRunner;
use buildtest_test_utils::init_tracing;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

fn args(build_dir: &Path, config: BuildConfig, hosts: &[&str]) -> CliArgs {
    CliArgs {
        config,
        build_dir: build_dir.to_path_buf(),
        log_level: None,
        hosts: hosts.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn no_hosts_runs_exactly_configure_build_test() -> TestResult {
    init_tracing();

    let tmp = tempdir()?;
    let build_dir = tmp.path().join("build");
    let args = args(&build_dir, BuildConfig::Debug, &[]);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut runner = FakeRunner::new(executed.clone());

    run_pipeline(&args, &mut runner).await?;

    let executed = executed.lock().unwrap();
    assert_eq!(
        *executed,
        vec![
            configure_command(&build_dir),
            build_command(&build_dir, BuildConfig::Debug),
            test_command(&build_dir, BuildConfig::Debug),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_step_carries_output_on_failure_flag() -> TestResult {
    init_tracing();

    let tmp = tempdir()?;
    let build_dir = tmp.path().join("build");
    let args = args(&build_dir, BuildConfig::Debug, &[]);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut runner = FakeRunner::new(executed.clone());

    run_pipeline(&args, &mut runner).await?;

    let executed = executed.lock().unwrap();
    let ctest = &executed[2];
    assert_eq!(ctest.program, "ctest");
    assert!(ctest.args.contains(&"--output-on-failure".to_string()));

    Ok(())
}

#[tokio::test]
async fn pipeline_creates_the_build_directory() -> TestResult {
    init_tracing();

    let tmp = tempdir()?;
    let build_dir = tmp.path().join("build");
    assert!(!build_dir.exists());

    let args = args(&build_dir, BuildConfig::Debug, &[]);
    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut runner = FakeRunner::new(executed.clone());

    run_pipeline(&args, &mut runner).await?;

    assert!(build_dir.is_dir());

    Ok(())
}

#[tokio::test]
async fn hosts_trigger_one_extra_invocation_with_hosts_in_order() -> TestResult {
    init_tracing();

    let tmp = tempdir()?;
    let build_dir = tmp.path().join("build");
    fs::create_dir_all(&build_dir)?;
    fs::write(build_dir.join("pingstats"), b"")?;

    let args = args(&build_dir, BuildConfig::Debug, &["a.example", "b.example"]);
    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut runner = FakeRunner::new(executed.clone());

    run_pipeline(&args, &mut runner).await?;

    let executed = executed.lock().unwrap();
    assert_eq!(executed.len(), 4);

    let pingstats = &executed[3];
    assert_eq!(
        pingstats.program,
        build_dir.join("pingstats").display().to_string()
    );
    assert_eq!(pingstats.args, vec!["a.example", "b.example"]);

    Ok(())
}

/// Release scenario: the executable sits in the multi-config layout
/// `build/Release/pingstats.exe` and is invoked with the hosts verbatim.
#[tokio::test]
async fn release_build_resolves_config_subdir_exe_and_forwards_hosts() -> TestResult {
    init_tracing();

    let tmp = tempdir()?;
    let build_dir = tmp.path().join("build");
    let release_dir = build_dir.join("Release");
    fs::create_dir_all(&release_dir)?;
    fs::write(release_dir.join("pingstats.exe"), b"")?;

    let args = args(&build_dir, BuildConfig::Release, &["8.8.8.8", "1.1.1.1"]);
    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut runner = FakeRunner::new(executed.clone());

    run_pipeline(&args, &mut runner).await?;

    let executed = executed.lock().unwrap();
    assert_eq!(
        *executed,
        vec![
            configure_command(&build_dir),
            build_command(&build_dir, BuildConfig::Release),
            test_command(&build_dir, BuildConfig::Release),
            CommandLine::new(
                release_dir.join("pingstats.exe").display().to_string(),
                ["8.8.8.8", "1.1.1.1"],
            ),
        ]
    );

    Ok(())
}
