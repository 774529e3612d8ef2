use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{all, service, stage, version};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "devopsctl")]
#[command(version = VERSION)]
#[command(about = "CLI for running the devops-toolchain pipeline locally")]
struct Cli {
    /// Enable verbose output (forwarded to stage scripts as DEVOPSCTL_VERBOSE=1)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run linters
    Lint(stage::StageArgs),
    /// Execute unit tests
    Test(stage::StageArgs),
    /// Build the package
    Build(stage::StageArgs),
    /// Build the Docker image
    Docker(stage::StageArgs),
    /// Publish artifacts
    Publish(stage::StageArgs),
    /// Run the complete pipeline
    All(all::AllArgs),
    /// Show version information and version utilities
    Version(version::VersionArgs),
    /// Run the demonstration service
    Service(service::ServiceArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command, cli.verbose);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
