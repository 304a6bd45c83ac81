//! External AI CLI integration.

pub mod client;
pub mod filter;
pub mod subprocess;

pub use client::{AiClient, AiExecutor, DefaultExecutor, MAX_ATTEMPTS, RETRY_INTERVAL};
pub use filter::{filter_noise, is_quota_error};
pub use subprocess::{RawOutput, check_ai_installed, run_ai};
