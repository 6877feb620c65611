//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with pactl, parec and the XDG config directory.

pub mod config;
pub mod pulse;
pub mod recording;

// Re-export adapters
pub use config::XdgConfigStore;
pub use pulse::PactlAudioServer;
pub use recording::ParecRecorder;
