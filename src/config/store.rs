//! Loading, creating, and saving `~/.gemmit/config.json`.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::template::{Template, TemplateEntry};
use crate::error::ConfigError;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "GEMMIT_CONFIG";

/// Config shipped with the binary and written on first run.
pub const DEFAULT_CONFIG: &str = include_str!("default_config.json");

const CONFIG_DIR: &str = ".gemmit";
const CONFIG_FILE: &str = "config.json";

fn default_highlight_color() -> String {
    "green".to_string()
}

fn default_ai_binary() -> String {
    "gemini".to_string()
}

fn default_noise_markers() -> Vec<String> {
    ["MCP STDOUT:", "MCP STDERR:", "[DEBUG]"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The parsed config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,

    #[serde(default)]
    pub autoconfirm: bool,

    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,

    /// AI CLI binary name or path, invoked as `<binary> -p <prompt>`.
    #[serde(default = "default_ai_binary")]
    pub ai_binary: String,

    /// Line prefixes stripped from the AI CLI's stdout and stderr.
    #[serde(default = "default_noise_markers")]
    pub noise_markers: Vec<String>,

    /// Top-level keys gemmit does not use, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: BTreeMap::new(),
            default_template: None,
            autoconfirm: false,
            highlight_color: default_highlight_color(),
            ai_binary: default_ai_binary(),
            noise_markers: default_noise_markers(),
            extra: Map::new(),
        }
    }
}

impl Config {
    /// Look up a template by name.
    pub fn template(&self, name: &str) -> Result<Template, ConfigError> {
        self.templates
            .get(name)
            .map(|entry| Template::new(name, entry.prompt.clone()))
            .ok_or_else(|| ConfigError::TemplateNotFound(name.to_string()))
    }

    /// Pick the requested template, or the configured default when none was given.
    ///
    /// A default naming a missing template is an error, never silently replaced.
    pub fn resolve_template(&self, requested: Option<&str>) -> Result<Template, ConfigError> {
        match requested.or(self.default_template.as_deref()) {
            Some(name) => self.template(name),
            None => Err(ConfigError::NoTemplateSelected),
        }
    }
}

/// Reads and writes the config file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$GEMMIT_CONFIG`, or `~/.gemmit/config.json`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Ok(Self::new(path)),
            _ => dirs::home_dir()
                .map(|home| Self::new(home.join(CONFIG_DIR).join(CONFIG_FILE)))
                .ok_or(ConfigError::NoHomeDirectory),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, writing the bundled default first if the file is missing.
    pub fn load_or_create(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            eprintln!(
                "Configuration file not found at {}. Creating a default one.",
                self.path.display()
            );
            self.write_raw(DEFAULT_CONFIG)?;
        }
        self.load()
    }

    /// Load and validate the config file.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                ConfigError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path: self.path.clone(),
                source: e,
            })?;

        if config.templates.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                path: self.path.clone(),
                reason: "template names must not be empty".to_string(),
            });
        }

        debug!(
            "Loaded config from {} ({} templates)",
            self.path.display(),
            config.templates.len()
        );
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config).map_err(|e| ConfigError::SerializeFailed {
            path: self.path.clone(),
            source: e,
        })?;
        self.write_raw(&json)
    }

    /// Persist `name` as the default template.
    ///
    /// The name is not checked against the current templates; a default may
    /// refer to a template that is added later.
    pub fn set_default_template(&self, name: &str) -> Result<Config, ConfigError> {
        let mut config = self.load_or_create()?;
        if !config.templates.contains_key(name) {
            warn!("Template '{}' is not defined in {} yet", name, self.path.display());
        }
        config.default_template = Some(name.to_string());
        self.save(&config)?;
        Ok(config)
    }

    /// Replace the file contents through a temp file in the same directory.
    fn write_raw(&self, content: &str) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(content.trim_end().as_bytes())
            .map_err(write_err)?;
        tmp.write_all(b"\n").map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
