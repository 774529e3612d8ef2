//! Stage dispatch and the sequential pipeline.
//!
//! Each stage maps to one shell script under the scripts directory
//! (`<stage>.sh`). `run_all` walks the fixed stage order and halts at the
//! first non-zero exit code.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::exec;

/// One named step of the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Lint,
    Test,
    Build,
    Docker,
    Publish,
}

impl Stage {
    /// Fixed execution order for the composite `all` run.
    pub const ORDER: [Stage; 5] = [
        Stage::Lint,
        Stage::Test,
        Stage::Build,
        Stage::Docker,
        Stage::Publish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lint => "lint",
            Stage::Test => "test",
            Stage::Build => "build",
            Stage::Docker => "docker",
            Stage::Publish => "publish",
        }
    }

    /// Script file name under the scripts directory.
    pub fn script_name(&self) -> String {
        format!("{}.sh", self.as_str())
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where stage scripts live and where they run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub project_root: PathBuf,
    pub scripts_dir: PathBuf,
    pub verbose: bool,
}

impl RunContext {
    /// Resolve the project root and scripts directory.
    ///
    /// Precedence per value: explicit flag, then `DEVOPSCTL_ROOT` /
    /// `DEVOPSCTL_SCRIPTS_DIR`, then the current working directory and
    /// `<root>/scripts`. Flag and env values are tilde-expanded.
    pub fn resolve(
        project_root: Option<&str>,
        scripts_dir: Option<&str>,
        verbose: bool,
    ) -> Result<Self> {
        let project_root = match flag_or_env(project_root, "DEVOPSCTL_ROOT") {
            Some(path) => PathBuf::from(path),
            None => env::current_dir().map_err(|e| {
                Error::internal_io(e.to_string(), Some("resolve project root".to_string()))
            })?,
        };

        let scripts_dir = match flag_or_env(scripts_dir, "DEVOPSCTL_SCRIPTS_DIR") {
            Some(path) => PathBuf::from(path),
            None => project_root.join("scripts"),
        };

        Ok(Self {
            project_root,
            scripts_dir,
            verbose,
        })
    }

    /// Environment additions every stage script receives.
    fn stage_env(&self, stage: Stage) -> Vec<(String, String)> {
        let mut env = vec![("DEVOPSCTL_STAGE".to_string(), stage.as_str().to_string())];
        if self.verbose {
            env.push(("DEVOPSCTL_VERBOSE".to_string(), "1".to_string()));
        }
        env
    }
}

fn flag_or_env(flag: Option<&str>, var: &str) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| env::var(var).ok().filter(|v| !v.is_empty()))
        .map(|path| shellexpand::tilde(&path).to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Passed,
    Failed,
}

/// Result of one stage invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOutcome {
    pub stage: String,
    pub script: String,
    pub exit_code: i32,
    pub status: StageStatus,
}

/// Result of a composite pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub stages: Vec<StageOutcome>,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halted_at: Option<String>,
    pub summary: PipelineSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub total_stages: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl PipelineResult {
    /// Process exit code for the whole run: the first failing stage's code,
    /// or 0 when every stage passed.
    pub fn exit_code(&self) -> i32 {
        self.stages
            .iter()
            .find(|outcome| outcome.status == StageStatus::Failed)
            .map(|outcome| outcome.exit_code)
            .unwrap_or(0)
    }
}

/// Locate a stage's script, run it, and wrap the exit code.
///
/// The script is checked for existence before anything is spawned; a missing
/// script is a typed error, not a stage failure. A non-zero exit from the
/// script is a normal `Failed` outcome.
pub fn run_stage(ctx: &RunContext, stage: Stage) -> Result<StageOutcome> {
    let script = ctx.scripts_dir.join(stage.script_name());
    if !script.exists() {
        return Err(Error::script_not_found(
            stage.as_str(),
            script.to_string_lossy(),
        ));
    }

    crate::log_status!("pipeline", "Running {}...", stage);
    let exit_code = exec::run_script_streaming(&script, &ctx.project_root, &ctx.stage_env(stage))?;

    let status = if exit_code == 0 {
        StageStatus::Passed
    } else {
        StageStatus::Failed
    };

    Ok(StageOutcome {
        stage: stage.as_str().to_string(),
        script: script.to_string_lossy().to_string(),
        exit_code,
        status,
    })
}

/// Run every stage in the fixed order, halting at the first failure.
///
/// Stages after the failing one are never invoked; they count as skipped in
/// the summary. No retries, no parallelism, no timeout.
pub fn run_all(ctx: &RunContext) -> Result<PipelineResult> {
    let mut stages = Vec::with_capacity(Stage::ORDER.len());
    let mut halted_at = None;

    for stage in Stage::ORDER {
        let outcome = run_stage(ctx, stage)?;
        let failed = outcome.status == StageStatus::Failed;
        stages.push(outcome);

        if failed {
            crate::log_status!("pipeline", "Pipeline failed at stage: {}", stage);
            halted_at = Some(stage.as_str().to_string());
            break;
        }

        crate::log_status!("pipeline", "Stage {} completed", stage);
    }

    let succeeded = stages
        .iter()
        .filter(|o| o.status == StageStatus::Passed)
        .count();
    let failed = stages.len() - succeeded;
    let status = if failed == 0 {
        StageStatus::Passed
    } else {
        StageStatus::Failed
    };

    Ok(PipelineResult {
        status,
        halted_at,
        summary: PipelineSummary {
            total_stages: Stage::ORDER.len(),
            succeeded,
            failed,
            skipped: Stage::ORDER.len() - stages.len(),
        },
        stages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_fixed() {
        let names: Vec<&str> = Stage::ORDER.iter().map(Stage::as_str).collect();
        assert_eq!(names, ["lint", "test", "build", "docker", "publish"]);
    }

    #[test]
    fn script_names_follow_convention() {
        assert_eq!(Stage::Docker.script_name(), "docker.sh");
    }

    #[test]
    fn stage_env_carries_stage_and_verbose_hint() {
        let ctx = RunContext {
            project_root: PathBuf::from("/tmp"),
            scripts_dir: PathBuf::from("/tmp/scripts"),
            verbose: true,
        };

        let env = ctx.stage_env(Stage::Test);
        assert!(env.contains(&("DEVOPSCTL_STAGE".to_string(), "test".to_string())));
        assert!(env.contains(&("DEVOPSCTL_VERBOSE".to_string(), "1".to_string())));

        let quiet = RunContext { verbose: false, ..ctx };
        assert_eq!(quiet.stage_env(Stage::Test).len(), 1);
    }
}
