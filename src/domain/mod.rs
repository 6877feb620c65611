//! Domain layer - Core business logic
//!
//! Contains value objects, the recording session entity, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod session;

// Re-export common types
pub use audio::{AudioFormat, AudioInput, ModuleId, SampleFormat, SinkId, SinkSnapshot, StreamId};
pub use config::AppConfig;
pub use error::*;
pub use session::{CleanupStep, RecordingSession};
