//! Prompt templates and prompt composition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A template as stored in the config file (`{"prompt": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub prompt: String,

    /// Keys gemmit does not use, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateEntry {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            extra: Map::new(),
        }
    }
}

/// A template resolved by name from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub prompt: String,
}

impl Template {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }

    /// Build the full AI request: the template prompt, a blank line, then the diff.
    pub fn build_prompt(&self, diff: &str) -> String {
        format!("{}\n\n{}", self.prompt, diff)
    }
}
