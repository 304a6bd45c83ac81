//! AI invocation with quota-aware retries.

use std::time::Duration;

use async_trait::async_trait;
use backoff::backoff::{Backoff, Constant};
use tracing::debug;

use crate::error::AiError;

use super::filter::{filter_noise, is_quota_error};
use super::subprocess::{RawOutput, check_ai_installed, run_ai};

/// Attempts per `generate` call, counting the first one.
pub const MAX_ATTEMPTS: u32 = 5;

/// Fixed wait between quota retries.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Trait for executing the AI CLI.
///
/// This abstraction allows mocking the subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiExecutor: Send + Sync {
    /// Fail with `AiError::NotInstalled` if the binary cannot be resolved.
    fn check_installed(&self) -> Result<(), AiError>;

    /// Run the CLI once with the given prompt.
    async fn run(&self, prompt: &str) -> Result<RawOutput, AiError>;
}

/// Executor that calls the real AI CLI binary.
#[derive(Debug, Clone)]
pub struct DefaultExecutor {
    binary: String,
}

impl DefaultExecutor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl AiExecutor for DefaultExecutor {
    fn check_installed(&self) -> Result<(), AiError> {
        check_ai_installed(&self.binary)
    }

    async fn run(&self, prompt: &str) -> Result<RawOutput, AiError> {
        run_ai(&self.binary, prompt).await
    }
}

/// How a single attempt ended once its output was filtered.
#[derive(Debug)]
enum Attempt {
    Generated(String),
    Throttled(String),
    Failed(AiError),
}

/// Classify one run after stripping noise from both streams.
fn classify<S: AsRef<str>>(raw: &RawOutput, markers: &[S]) -> Attempt {
    let stdout = filter_noise(&raw.stdout, markers).trim().to_string();
    let stderr = filter_noise(&raw.stderr, markers).trim().to_string();

    if raw.success {
        return Attempt::Generated(stdout);
    }

    if is_quota_error(&stderr) {
        return Attempt::Throttled(stderr);
    }

    match (stderr.is_empty(), stdout.is_empty()) {
        // Only noise on stderr with real content on stdout is not a real failure.
        (true, false) => {
            debug!(
                "AI CLI exited with {:?} but stderr was only noise; using stdout",
                raw.code
            );
            Attempt::Generated(stdout)
        }
        (true, true) => Attempt::Failed(AiError::UnexpectedInvocation {
            detail: "only noise, no output".to_string(),
        }),
        (false, _) => Attempt::Failed(AiError::UnexpectedInvocation { detail: stderr }),
    }
}

/// Produces commit messages from prompts through an [`AiExecutor`].
pub struct AiClient<E> {
    executor: E,
    noise_markers: Vec<String>,
    retry_interval: Duration,
}

impl<E: AiExecutor> AiClient<E> {
    pub fn new(executor: E, noise_markers: Vec<String>) -> Self {
        Self {
            executor,
            noise_markers,
            retry_interval: RETRY_INTERVAL,
        }
    }

    /// Override the wait between quota retries.
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    /// Generate text for `prompt`.
    ///
    /// Retries only on quota/rate-limit failures, up to [`MAX_ATTEMPTS`]
    /// attempts with a fixed wait. Every other failure is returned at once.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let mut backoff = Constant::new(self.retry_interval);
        self.generate_with_backoff(prompt, &mut backoff).await
    }

    pub(crate) async fn generate_with_backoff<B: Backoff>(
        &self,
        prompt: &str,
        backoff: &mut B,
    ) -> Result<String, AiError> {
        self.executor.check_installed()?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!("AI attempt {}/{} ({} chars)", attempt, MAX_ATTEMPTS, prompt.len());

            let raw = self.executor.run(prompt).await?;

            match classify(&raw, &self.noise_markers) {
                Attempt::Generated(text) => return Ok(text),
                Attempt::Failed(err) => return Err(err),
                Attempt::Throttled(stderr) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(AiError::QuotaExceeded { stderr });
                    }
                    let wait = backoff.next_backoff().unwrap_or(self.retry_interval);
                    eprintln!(
                        "API quota error (429). Retrying in {:?}... [{}/{}]",
                        wait, attempt, MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}
