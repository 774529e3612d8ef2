use clap::Args;

use devopsctl::service::{self, ServiceReport};

use super::CmdResult;

#[derive(Args)]
pub struct ServiceArgs {
    /// Task id for the sample task (generated when omitted)
    #[arg(long)]
    task_id: Option<String>,
}

pub fn run_json(args: ServiceArgs) -> CmdResult<ServiceReport> {
    Ok((service::run(args.task_id.as_deref()), 0))
}
