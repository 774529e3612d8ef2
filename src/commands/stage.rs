use clap::Args;
use serde::Serialize;

use devopsctl::pipeline::{self, RunContext, Stage, StageStatus};

use super::CmdResult;

#[derive(Args)]
pub struct StageArgs {
    /// Project root the stage script runs in (default: current directory)
    #[arg(long)]
    pub project_root: Option<String>,

    /// Directory containing the stage scripts (default: <project-root>/scripts)
    #[arg(long)]
    pub scripts_dir: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOutput {
    status: String,
    stage: String,
    script: String,
    exit_code: i32,
}

pub fn run_json(stage: Stage, args: StageArgs, verbose: bool) -> CmdResult<StageOutput> {
    let ctx = RunContext::resolve(
        args.project_root.as_deref(),
        args.scripts_dir.as_deref(),
        verbose,
    )?;

    let outcome = pipeline::run_stage(&ctx, stage)?;

    let status = match outcome.status {
        StageStatus::Passed => "passed",
        StageStatus::Failed => "failed",
    };
    let exit_code = outcome.exit_code;

    Ok((
        StageOutput {
            status: status.to_string(),
            stage: outcome.stage,
            script: outcome.script,
            exit_code,
        },
        exit_code,
    ))
}
