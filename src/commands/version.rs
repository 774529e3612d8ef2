use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use devopsctl::version::{bump_version, parse_version, BumpKind};

use super::CmdResult;

#[derive(Args)]
pub struct VersionArgs {
    #[command(subcommand)]
    command: Option<VersionCommand>,
}

#[derive(Subcommand)]
enum VersionCommand {
    /// Parse a version string into its numeric components
    Parse {
        /// Version string (e.g., 1.2.3)
        value: String,
    },
    /// Bump a version string with semantic versioning
    Bump {
        /// Current version (e.g., 1.2.3)
        current: String,

        /// Version bump kind (patch when omitted)
        #[arg(value_enum)]
        kind: Option<BumpArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BumpArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpArg> for BumpKind {
    fn from(kind: BumpArg) -> Self {
        match kind {
            BumpArg::Major => BumpKind::Major,
            BumpArg::Minor => BumpKind::Minor,
            BumpArg::Patch => BumpKind::Patch,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum VersionOutput {
    Show(VersionShowOutput),
    Parse(VersionParseOutput),
    Bump(VersionBumpOutput),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionShowOutput {
    version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionParseOutput {
    version: String,
    major: u32,
    minor: u32,
    patch: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionBumpOutput {
    old_version: String,
    new_version: String,
    kind: String,
}

pub fn run_json(args: VersionArgs) -> CmdResult<VersionOutput> {
    let output = match args.command {
        None => VersionOutput::Show(VersionShowOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
        Some(VersionCommand::Parse { value }) => {
            let (major, minor, patch) = parse_version(&value)?;
            VersionOutput::Parse(VersionParseOutput {
                version: value,
                major,
                minor,
                patch,
            })
        }
        Some(VersionCommand::Bump { current, kind }) => {
            let kind = kind.map(BumpKind::from).unwrap_or_default();
            let new_version = bump_version(&current, kind)?;
            VersionOutput::Bump(VersionBumpOutput {
                old_version: current,
                new_version,
                kind: kind.as_str().to_string(),
            })
        }
    };

    Ok((output, 0))
}
