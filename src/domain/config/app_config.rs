//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::audio::{AudioFormat, SampleFormat};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Container format of recordings
    pub audio_format: Option<String>,
    /// Raw sample format requested from the sound server
    pub sample_format: Option<String>,
    /// Sound server to talk to instead of the local default
    pub server: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            audio_format: Some(AudioFormat::default().to_string()),
            sample_format: Some(SampleFormat::default().to_string()),
            server: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            audio_format: other.audio_format.or(self.audio_format),
            sample_format: other.sample_format.or(self.sample_format),
            server: other.server.or(self.server),
        }
    }

    /// Get audio format, or wav if not set/invalid
    pub fn audio_format_or_default(&self) -> AudioFormat {
        self.audio_format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get sample format, or s16le if not set/invalid
    pub fn sample_format_or_default(&self) -> SampleFormat {
        self.sample_format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the server address, ignoring empty values
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref().filter(|s| !s.is_empty())
    }
}
