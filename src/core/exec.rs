//! Local subprocess execution for stage scripts.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Shell used to run stage scripts on every platform (Git Bash/WSL on Windows).
const SHELL: &str = "bash";

/// Run a shell script with inherited stdio, blocking until it exits.
///
/// The child runs under `bash` in `working_dir` with the parent environment
/// plus the given additions. Its stdout/stderr stream straight through to
/// the caller's terminal; only the exit code is captured.
pub fn run_script_streaming(
    script: &Path,
    working_dir: &Path,
    env: &[(String, String)],
) -> Result<i32> {
    let mut cmd = Command::new(SHELL);
    cmd.arg(script)
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    for (key, value) in env {
        cmd.env(key, value);
    }

    match cmd.status() {
        // Killed by signal on Unix leaves no code; report -1 like a failed spawn
        Ok(status) => Ok(status.code().unwrap_or(-1)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::shell_not_found(SHELL)),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some(format!("run {}", script.display())),
        )),
    }
}
