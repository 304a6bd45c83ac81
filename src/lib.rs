//! gemmit - A CLI tool that writes git commit messages from staged changes.
//!
//! # Overview
//!
//! gemmit reads `git diff --cached`, wraps it in a prompt template from
//! `~/.gemmit/config.json`, and asks an external AI CLI for a commit message.
//! The message can be reviewed, edited, or regenerated before it is
//! committed and optionally pushed.

pub mod ai;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod review;
pub mod style;

// Re-export commonly used types
pub use ai::{AiClient, AiExecutor, DefaultExecutor};
pub use commands::{GenerateOptions, GenerateOutcome};
pub use config::{Config, ConfigStore, Template};
pub use error::{AiError, ConfigError, GemmitError, GitError, ReviewError};
pub use git::{Git, PushTarget};
pub use review::{ReviewOutcome, ReviewUi, TerminalUi};
