pub type CmdResult<T> = devopsctl::Result<(T, i32)>;

pub mod all;
pub mod service;
pub mod stage;
pub mod version;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($module:ident, $($arg:expr),*) => {
        crate::output::map_cmd_result_to_json($module::run_json($($arg),*))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    verbose: bool,
) -> (devopsctl::Result<serde_json::Value>, i32) {
    use devopsctl::pipeline::Stage;

    crate::tty::status("devopsctl is working...");

    match command {
        crate::Commands::Lint(args) => dispatch!(stage, Stage::Lint, args, verbose),
        crate::Commands::Test(args) => dispatch!(stage, Stage::Test, args, verbose),
        crate::Commands::Build(args) => dispatch!(stage, Stage::Build, args, verbose),
        crate::Commands::Docker(args) => dispatch!(stage, Stage::Docker, args, verbose),
        crate::Commands::Publish(args) => dispatch!(stage, Stage::Publish, args, verbose),
        crate::Commands::All(args) => dispatch!(all, args, verbose),
        crate::Commands::Version(args) => dispatch!(version, args),
        crate::Commands::Service(args) => dispatch!(service, args),
    }
}
