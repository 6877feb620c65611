//! Recording port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::application::interrupt::Interrupt;
use crate::domain::audio::AudioFormat;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("{0} not found. Please install pulseaudio-utils (or pipewire-pulse).")]
    RecorderNotFound(String),

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("Recording was cancelled")]
    Cancelled,
}

/// Port for recording a monitor source into a file
#[async_trait]
pub trait MonitorRecorder: Send + Sync {
    /// Record `source` into `destination` until the recorder exits.
    ///
    /// Blocks for as long as the recording runs. Raising `interrupt` stops
    /// the recorder gracefully and is reported as
    /// [`RecordingError::Cancelled`]. The recorder's exit status is not
    /// inspected.
    async fn record(
        &self,
        source: &str,
        format: AudioFormat,
        destination: &Path,
        interrupt: &Interrupt,
    ) -> Result<(), RecordingError>;
}
