//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_server;
pub mod config;
pub mod recorder;

// Re-export common types
pub use audio_server::{
    AudioServer, AudioServerError, SinkInfo, SinkInputInfo, APPLICATION_NAME_PROPERTY,
};
pub use config::ConfigStore;
pub use recorder::{MonitorRecorder, RecordingError};
