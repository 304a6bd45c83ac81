//! Git operations via the system `git` binary.

pub mod command;
pub mod repo;

pub use command::{run_git, run_git_raw};
pub use repo::{Git, PushTarget};
