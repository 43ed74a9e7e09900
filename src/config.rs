use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::error::Result;
use crate::lang;

/// Environment variable overriding the chat endpoint base URL.
pub const CHAT_URL_ENV: &str = "CIVIC_PULSE_CHAT_URL";

/// Default chat endpoint when nothing is configured.
pub const DEFAULT_CHAT_URL: &str = "http://localhost:5000";

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "civic-pulse.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the chat endpoint; `/api/chat` is appended per request.
    #[serde(default = "default_chat_url")]
    pub base_url: String,
    /// Stable id sent with every chat request. Generated per session when
    /// the config file does not pin one.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Recognizer language the session starts in.
    #[serde(default = "default_language")]
    pub language: String,
    /// Languages offered by the input-language cycler.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_chat_url() -> String {
    DEFAULT_CHAT_URL.to_string()
}

fn default_user_id() -> String {
    format!("citizen-{}", Uuid::new_v4())
}

fn default_language() -> String {
    lang::DEFAULT_LANGUAGE.to_string()
}

fn default_languages() -> Vec<String> {
    lang::DEFAULT_INPUT_LANGUAGES
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}

fn default_rate() -> f32 {
    1.0
}

fn default_pitch() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    1.0
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_url(),
            user_id: default_user_id(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            languages: default_languages(),
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}

impl Config {
    /// Loads `civic-pulse.yaml` from the working directory when present,
    /// otherwise starts from defaults. The environment override is applied
    /// either way.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::load_from(Path::new(CONFIG_FILE))?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(CHAT_URL_ENV) {
            if !url.trim().is_empty() {
                self.chat.base_url = url.trim().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_point_at_local_endpoint() {
        let config = Config::default();
        assert_eq!(config.chat.base_url, DEFAULT_CHAT_URL);
        assert!(config.chat.user_id.starts_with("citizen-"));
        assert_eq!(config.speech.language, "en-IN");
        assert_eq!(config.speech.languages.len(), 3);
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("civic-pulse.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "chat:\n  base_url: \"http://10.0.0.5:8080\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.chat.base_url, "http://10.0.0.5:8080");
        // Unspecified sections keep their defaults.
        assert_eq!(config.speech.rate, 1.0);
        assert!(config.chat.user_id.starts_with("citizen-"));
    }

    #[test]
    fn test_env_var_wins_over_file_value() {
        std::env::set_var(CHAT_URL_ENV, "http://gateway:9000");
        let mut config = Config::default();
        config.apply_env_overrides();
        std::env::remove_var(CHAT_URL_ENV);
        assert_eq!(config.chat.base_url, "http://gateway:9000");
    }
}
