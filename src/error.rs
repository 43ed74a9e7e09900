use thiserror::Error;

#[derive(Error, Debug)]
pub enum CivicError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Chat endpoint error: {0}")]
    ChatError(String),

    #[error("Speech error: {0}")]
    SpeechError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<&str> for CivicError {
    fn from(error: &str) -> Self {
        CivicError::RuntimeError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CivicError>;
