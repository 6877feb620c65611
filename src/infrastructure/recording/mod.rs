//! Recording infrastructure module
//!
//! Captures the combined sink's monitor source with `parec`, which writes
//! the container file itself.

mod parec;

pub use parec::{ParecRecorder, PAREC_PROGRAM};
