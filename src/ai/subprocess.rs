//! AI CLI spawning.

use std::env;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::AiError;

/// Default timeout for one AI invocation (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "GEMMIT_AI_TIMEOUT";

/// Largest prompt passed as one argument. Linux rejects any single argv
/// string longer than 128 KiB including its NUL (`MAX_ARG_STRLEN`) with E2BIG.
pub const MAX_PROMPT_ARG_BYTES: usize = 128 * 1024 - 1;

/// Captured result of one AI CLI run, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Get the configured timeout duration.
///
/// Reads from GEMMIT_AI_TIMEOUT if set, otherwise uses the default of
/// 300 seconds. Logs a warning if the variable holds an invalid value.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Check that the AI CLI resolves on `PATH` (or as a direct path).
pub fn check_ai_installed(binary: &str) -> Result<(), AiError> {
    match which::which(binary) {
        Ok(path) => {
            debug!("Resolved {} to {}", binary, path.display());
            Ok(())
        }
        Err(_) => Err(AiError::NotInstalled {
            binary: binary.to_string(),
        }),
    }
}

/// Run `<binary> -p <prompt>` and capture both streams.
///
/// A non-zero exit is returned as output, not as an error; classification
/// happens after noise filtering.
pub async fn run_ai(binary: &str, prompt: &str) -> Result<RawOutput, AiError> {
    if prompt.len() > MAX_PROMPT_ARG_BYTES {
        return Err(AiError::PromptTooLarge {
            binary: binary.to_string(),
            bytes: prompt.len(),
            limit: MAX_PROMPT_ARG_BYTES,
        });
    }

    let timeout_duration = get_timeout();
    let timeout_secs = timeout_duration.as_secs();

    let output = timeout(
        timeout_duration,
        Command::new(binary)
            .arg("-p")
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| AiError::Timeout {
        binary: binary.to_string(),
        secs: timeout_secs,
    })?
    .map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AiError::NotInstalled {
                binary: binary.to_string(),
            }
        } else {
            AiError::SpawnFailed {
                binary: binary.to_string(),
                source: e,
            }
        }
    })?;

    Ok(RawOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
