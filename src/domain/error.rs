//! Domain error types

use thiserror::Error;

/// Error when an unsupported audio container format is requested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid audio format: \"{input}\". Valid formats are: wav")]
pub struct InvalidAudioFormatError {
    pub input: String,
}

/// Error when an unknown raw sample format is requested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid sample format: \"{input}\". Valid formats are: u8, s16le, s16be, s24le, s24be, s32le, s32be, float32le, float32be")]
pub struct InvalidSampleFormatError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
