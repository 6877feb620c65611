//! Audio domain module

mod format;
mod ids;
mod input;

pub use format::{AudioFormat, SampleFormat, ALL_AUDIO_FORMATS};
pub use ids::{ModuleId, SinkId, StreamId};
pub use input::{
    combine_sink_args, combined_monitor_source, AudioInput, CombinedSinkHandle, SinkSnapshot,
    COMBINED_SINK_NAME, COMBINE_SINK_MODULE, SLAVE_SEPARATOR,
};
