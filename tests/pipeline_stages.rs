use std::fs;
use std::path::Path;

use devopsctl::pipeline::{self, RunContext, Stage, StageStatus};
use tempfile::TempDir;

fn write_script(scripts_dir: &Path, stage: &str, body: &str) {
    fs::write(scripts_dir.join(format!("{}.sh", stage)), body).unwrap();
}

/// Context with both paths pinned so resolution never falls back to the
/// test process's working directory or environment.
fn context(root: &TempDir) -> RunContext {
    let scripts_dir = root.path().join("scripts");
    fs::create_dir_all(&scripts_dir).unwrap();

    RunContext::resolve(
        Some(root.path().to_str().unwrap()),
        Some(scripts_dir.to_str().unwrap()),
        false,
    )
    .unwrap()
}

#[test]
fn passing_stage_reports_exit_code_zero() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);
    write_script(&ctx.scripts_dir, "lint", "exit 0\n");

    let outcome = pipeline::run_stage(&ctx, Stage::Lint).unwrap();

    assert_eq!(outcome.stage, "lint");
    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.status, StageStatus::Passed);
}

#[test]
fn failing_stage_propagates_its_exit_code() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);
    write_script(&ctx.scripts_dir, "test", "exit 7\n");

    let outcome = pipeline::run_stage(&ctx, Stage::Test).unwrap();

    assert_eq!(outcome.exit_code, 7);
    assert_eq!(outcome.status, StageStatus::Failed);
}

#[test]
fn missing_script_is_a_typed_error_without_spawning() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);

    let err = pipeline::run_stage(&ctx, Stage::Publish).unwrap_err();

    assert_eq!(err.code.as_str(), "script.not_found");
    assert_eq!(err.details["stage"], "publish");
}

#[test]
fn stage_runs_in_project_root_with_stage_env() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);
    write_script(
        &ctx.scripts_dir,
        "build",
        "printf '%s' \"$DEVOPSCTL_STAGE\" > ran.txt\n",
    );

    pipeline::run_stage(&ctx, Stage::Build).unwrap();

    let marker = fs::read_to_string(root.path().join("ran.txt")).unwrap();
    assert_eq!(marker, "build");
}

#[test]
fn all_stops_at_first_failure_and_skips_the_rest() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);

    write_script(&ctx.scripts_dir, "lint", "touch lint.ran\n");
    write_script(&ctx.scripts_dir, "test", "exit 3\n");
    for stage in ["build", "docker", "publish"] {
        write_script(
            &ctx.scripts_dir,
            stage,
            &format!("touch {}.ran\n", stage),
        );
    }

    let result = pipeline::run_all(&ctx).unwrap();

    assert_eq!(result.status, StageStatus::Failed);
    assert_eq!(result.exit_code(), 3);
    assert_eq!(result.halted_at.as_deref(), Some("test"));
    assert_eq!(result.stages.len(), 2);
    assert_eq!(result.summary.succeeded, 1);
    assert_eq!(result.summary.failed, 1);
    assert_eq!(result.summary.skipped, 3);

    // Stages after the failure never ran
    assert!(root.path().join("lint.ran").exists());
    assert!(!root.path().join("build.ran").exists());
    assert!(!root.path().join("docker.ran").exists());
    assert!(!root.path().join("publish.ran").exists());
}

#[test]
fn all_runs_every_stage_in_order_when_they_pass() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);

    for stage in ["lint", "test", "build", "docker", "publish"] {
        write_script(
            &ctx.scripts_dir,
            stage,
            &format!("echo {} >> order.txt\n", stage),
        );
    }

    let result = pipeline::run_all(&ctx).unwrap();

    assert_eq!(result.status, StageStatus::Passed);
    assert_eq!(result.exit_code(), 0);
    assert!(result.halted_at.is_none());
    assert_eq!(result.stages.len(), 5);
    assert_eq!(result.summary.skipped, 0);

    let order = fs::read_to_string(root.path().join("order.txt")).unwrap();
    let ran: Vec<&str> = order.split_whitespace().collect();
    assert_eq!(ran, ["lint", "test", "build", "docker", "publish"]);
}

#[test]
fn all_surfaces_a_missing_script_before_running_it() {
    let root = TempDir::new().unwrap();
    let ctx = context(&root);

    write_script(&ctx.scripts_dir, "lint", "exit 0\n");
    // No test.sh: the pipeline should error at the second stage

    let err = pipeline::run_all(&ctx).unwrap_err();
    assert_eq!(err.code.as_str(), "script.not_found");
    assert_eq!(err.details["stage"], "test");
}
