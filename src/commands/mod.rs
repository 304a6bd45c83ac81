//! Top-level operations behind the command line.

pub mod generate;
pub mod set_default;

pub use generate::{GenerateOptions, GenerateOutcome, run_generate};
pub use set_default::run_set_default;
