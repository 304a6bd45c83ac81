//! Error types for gemmit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading, creating, or saving the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the home directory for the config file")]
    NoHomeDirectory,

    #[error("Config file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("reading config file at {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading or parsing config file at {}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serializing config for {}", path.display())]
    SerializeFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file at {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("writing to config file at {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template '{0}' not found in config.")]
    TemplateNotFound(String),

    #[error("No template specified and no default template set.")]
    NoTemplateSelected,
}

impl ConfigError {
    /// Underlying error text shown under `Details:`.
    pub fn detail(&self) -> Option<String> {
        match self {
            ConfigError::ReadFailed { source, .. } | ConfigError::WriteFailed { source, .. } => {
                Some(source.to_string())
            }
            ConfigError::ParseFailed { source, .. } | ConfigError::SerializeFailed { source, .. } => {
                Some(source.to_string())
            }
            ConfigError::NoTemplateSelected => Some(
                "Usage: gemmit <template> or gemmit --set-default <template>".to_string(),
            ),
            _ => None,
        }
    }
}

/// Errors from running the system `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed")]
    CommandFailed { operation: String, stderr: String },
}

impl GitError {
    pub fn detail(&self) -> Option<String> {
        match self {
            GitError::NotInstalled => {
                Some("Please install git and ensure it is in your PATH.".to_string())
            }
            GitError::SpawnFailed { source, .. } => Some(source.to_string()),
            GitError::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => {
                Some(stderr.trim().to_string())
            }
            GitError::CommandFailed { .. } => None,
        }
    }
}

/// Errors from the external AI CLI.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("{binary} not found in PATH")]
    NotInstalled { binary: String },

    #[error("Failed to spawn {binary} process")]
    SpawnFailed {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{binary} process timed out after {secs} seconds")]
    Timeout { binary: String, secs: u64 },

    #[error("Prompt is too large to pass to {binary} ({bytes} bytes)")]
    PromptTooLarge {
        binary: String,
        bytes: usize,
        limit: usize,
    },

    #[error("API quota exceeded after maximum retries.")]
    QuotaExceeded { stderr: String },

    #[error("An unexpected error occurred while calling the AI CLI.")]
    UnexpectedInvocation { detail: String },
}

impl AiError {
    pub fn detail(&self) -> Option<String> {
        match self {
            AiError::NotInstalled { binary } => Some(format!(
                "Please install the {binary} agent and ensure it is in your PATH."
            )),
            AiError::SpawnFailed { source, .. } => Some(source.to_string()),
            AiError::Timeout { .. } => {
                Some("Raise the limit with the GEMMIT_AI_TIMEOUT environment variable.".to_string())
            }
            AiError::PromptTooLarge { limit, .. } => Some(format!(
                "The prompt and staged diff are passed as a single command-line argument, \
                 which the OS limits to {limit} bytes.\nStage fewer changes and commit in parts."
            )),
            AiError::QuotaExceeded { stderr } => Some(stderr.clone()),
            AiError::UnexpectedInvocation { detail } => Some(detail.clone()),
        }
    }
}

/// Errors from the interactive review loop.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Failed to read answer from the terminal")]
    PromptFailed(#[source] dialoguer::Error),

    #[error("Failed to prepare temporary file for editing")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to launch editor '{editor}'")]
    EditorSpawnFailed {
        editor: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReviewError {
    pub fn detail(&self) -> Option<String> {
        match self {
            ReviewError::PromptFailed(e) => Some(e.to_string()),
            ReviewError::TempFile(e) => Some(e.to_string()),
            ReviewError::EditorSpawnFailed { source, .. } => Some(source.to_string()),
        }
    }
}

/// Top-level error for one gemmit invocation.
///
/// Every variant is terminal; [`GemmitError::exit_code`] decides whether the
/// process ends successfully.
#[derive(Error, Debug)]
pub enum GemmitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("No staged changes found.")]
    NoStagedChanges,

    #[error("Commit aborted.")]
    UserAborted,
}

impl GemmitError {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            GemmitError::NoStagedChanges => 0,
            _ => 1,
        }
    }

    /// One-line message printed after `Error:`.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Underlying error text, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            GemmitError::Config(e) => e.detail(),
            GemmitError::Git(e) => e.detail(),
            GemmitError::Ai(e) => e.detail(),
            GemmitError::Review(e) => e.detail(),
            GemmitError::NoStagedChanges | GemmitError::UserAborted => None,
        }
    }
}
