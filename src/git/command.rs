//! Low-level `git` invocation.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GitError;

/// Run git with `args` in `workdir` and return its raw output.
///
/// A non-zero exit is not an error here; callers decide.
pub fn run_git_raw(workdir: Option<&Path>, args: &[&str], operation: &str) -> Result<Output, GitError> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }

    debug!("Running git {}", args.join(" "));

    cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            GitError::NotInstalled
        } else {
            GitError::SpawnFailed {
                operation: operation.to_string(),
                source: e,
            }
        }
    })
}

/// Run git and return stdout, failing on non-zero exit.
pub fn run_git(workdir: Option<&Path>, args: &[&str], operation: &str) -> Result<String, GitError> {
    let output = run_git_raw(workdir, args, operation)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(GitError::CommandFailed {
            operation: operation.to_string(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
