//! Bursary configuration.
//!
//! Settings come from `~/.bursary/config.toml`, every field defaulted, with
//! environment variables layered on top. Validation runs once at load time
//! so the pipelines can trust what they are handed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root of the config file.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the generation service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Tutor chatbot settings
    #[serde(default)]
    pub tutor: TutorConfig,

    /// Scholarship finder settings
    #[serde(default)]
    pub finder: FinderConfig,

    /// Conversation history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

// Hand-written so the API key never lands in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.api_key.is_some() { "[REDACTED]" } else { "None" };
        f.debug_struct("AppConfig")
            .field("api_key", &key)
            .field("tutor", &self.tutor)
            .field("finder", &self.finder)
            .field("history", &self.history)
            .finish()
    }
}

/// Settings for the general-purpose tutor chatbot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    #[serde(default = "default_tutor_model")]
    pub model: String,

    #[serde(default = "default_tutor_temperature")]
    pub temperature: f32,

    /// Cap on completion length. None leaves it to the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_tutor_model() -> String {
    "gpt-4o-mini".into()
}
fn default_tutor_temperature() -> f32 {
    0.3
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: default_tutor_model(),
            temperature: default_tutor_temperature(),
            max_tokens: None,
        }
    }
}

/// Settings for the web-search scholarship finder.
///
/// Search-preview models reject sampling parameters, so there is no
/// temperature knob here on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default = "default_finder_model")]
    pub model: String,
}

fn default_finder_model() -> String {
    "gpt-4o-mini-search-preview".into()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            model: default_finder_model(),
        }
    }
}

/// Settings for the rolling conversation window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How many of the most recent turns are replayed into each request.
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
}

fn default_max_turns() -> usize {
    6
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.bursary/config.toml).
    ///
    /// Also checks environment variables:
    /// - `BURSARY_API_KEY` (highest priority)
    /// - `OPENAI_API_KEY`
    /// - `BURSARY_TUTOR_MODEL` / `BURSARY_FINDER_MODEL` model overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_dir().join("config.toml"))?;

        // Env vars win over the file.
        if config.api_key.is_none() {
            config.api_key = std::env::var("BURSARY_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }
        if let Ok(model) = std::env::var("BURSARY_TUTOR_MODEL") {
            config.tutor.model = model;
        }
        if let Ok(model) = std::env::var("BURSARY_FINDER_MODEL") {
            config.finder.model = model;
        }

        Ok(config)
    }

    /// Load and validate a specific config file. A missing file is not an
    /// error; it yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The directory holding the config file.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".bursary")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tutor.temperature < 0.0 || self.tutor.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "tutor.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.history.max_turns == 0 {
            return Err(ConfigError::ValidationError(
                "history.max_turns must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Whether a key was found in the file or the environment.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The default settings rendered as TOML, for first-run guidance.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            tutor: TutorConfig::default(),
            finder: FinderConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

/// The user's home directory, with a writable fallback.
fn dirs_home() -> PathBuf {
    let (var, fallback) = if cfg!(target_os = "windows") {
        ("USERPROFILE", "C:\\Users\\Default")
    } else {
        ("HOME", "/tmp")
    };
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(fallback))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Config file {path} is not valid TOML: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("Bad configuration value: {0}")]
    ValidationError(String),
}
