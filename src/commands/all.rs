use clap::Args;

use devopsctl::pipeline::{self, PipelineResult, RunContext};

use super::CmdResult;

#[derive(Args)]
pub struct AllArgs {
    /// Project root the stage scripts run in (default: current directory)
    #[arg(long)]
    pub project_root: Option<String>,

    /// Directory containing the stage scripts (default: <project-root>/scripts)
    #[arg(long)]
    pub scripts_dir: Option<String>,
}

pub fn run_json(args: AllArgs, verbose: bool) -> CmdResult<PipelineResult> {
    let ctx = RunContext::resolve(
        args.project_root.as_deref(),
        args.scripts_dir.as_deref(),
        verbose,
    )?;

    let result = pipeline::run_all(&ctx)?;
    let exit_code = result.exit_code();

    Ok((result, exit_code))
}
