//! Snapshots of sound server objects

use std::fmt;

use super::ids::{ModuleId, SinkId, StreamId};

/// Name of the combined sink created for a session.
///
/// Only one session may own a sink with this name at any time.
pub const COMBINED_SINK_NAME: &str = "apprec";

/// Module implementing the combined sink
pub const COMBINE_SINK_MODULE: &str = "module-combine-sink";

/// Separator between slave sink names in the module argument
pub const SLAVE_SEPARATOR: &str = ",";

/// Monitor source of the combined sink, used as the recording source
pub fn combined_monitor_source() -> String {
    format!("{}.monitor", COMBINED_SINK_NAME)
}

/// An application stream that can be recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInput {
    /// Application name shown to the user
    pub name: String,
    /// Sink the stream currently plays to
    pub sink: SinkId,
    /// The stream itself
    pub stream: StreamId,
}

impl AudioInput {
    pub fn new(name: impl Into<String>, sink: SinkId, stream: StreamId) -> Self {
        Self {
            name: name.into(),
            sink,
            stream,
        }
    }
}

impl fmt::Display for AudioInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An output device with an active port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSnapshot {
    pub id: SinkId,
    pub name: String,
}

impl SinkSnapshot {
    pub fn new(id: SinkId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The transient combined sink of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedSinkHandle {
    /// Needed to unload the sink
    pub module: ModuleId,
    /// Needed to route streams into it
    pub sink: SinkId,
}

/// Build the `module-combine-sink` argument string for the given outputs.
///
/// Slave names keep the order of `outputs`.
pub fn combine_sink_args(outputs: &[SinkSnapshot]) -> String {
    let slaves = outputs
        .iter()
        .map(|sink| sink.name.as_str())
        .collect::<Vec<_>>()
        .join(SLAVE_SEPARATOR);

    format!("sink_name={} slaves={}", COMBINED_SINK_NAME, slaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_args_single_output() {
        let outputs = [SinkSnapshot::new(SinkId::new(77), "testsink")];
        assert_eq!(
            combine_sink_args(&outputs),
            "sink_name=apprec slaves=testsink"
        );
    }

    #[test]
    fn combine_args_keep_order() {
        let outputs = [
            SinkSnapshot::new(SinkId::new(3), "hdmi"),
            SinkSnapshot::new(SinkId::new(1), "speakers"),
            SinkSnapshot::new(SinkId::new(2), "headset"),
        ];
        assert_eq!(
            combine_sink_args(&outputs),
            "sink_name=apprec slaves=hdmi,speakers,headset"
        );
    }

    #[test]
    fn monitor_source_uses_reserved_name() {
        assert_eq!(combined_monitor_source(), "apprec.monitor");
    }

    #[test]
    fn input_displays_name() {
        let input = AudioInput::new("Firefox", SinkId::new(0), StreamId::new(12));
        assert_eq!(input.to_string(), "Firefox");
    }
}
