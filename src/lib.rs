//! apprec - record the audio of a single application
//!
//! This crate lists the applications currently playing through a PulseAudio
//! compatible sound server, routes the chosen one through a combined sink,
//! records that sink's monitor with `parec`, and restores the original
//! routing when the recording ends.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Server ids, audio formats, the recording session and its cleanup plan
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (pactl, parec, XDG config file)
//! - **CLI**: Command-line interface, argument parsing, prompt and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
