//! Config file handling: named prompt templates, default template, UI color.

pub mod store;
pub mod template;

pub use store::{CONFIG_ENV_VAR, Config, ConfigStore, DEFAULT_CONFIG};
pub use template::{Template, TemplateEntry};
