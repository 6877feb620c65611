//! Sound server infrastructure module
//!
//! Talks to PulseAudio (or pipewire-pulse) through the `pactl` tool.

mod json;
mod pactl;

pub use pactl::{PactlAudioServer, PACTL_PROGRAM};
