//! Recording session entity

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::audio::{AudioFormat, AudioInput, CombinedSinkHandle, ModuleId, SinkId, StreamId};

/// One undo action performed when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStep {
    /// Unload the combine-sink module. `None` when it was never loaded.
    UnloadCombinedSink { module: Option<ModuleId> },
    /// Move the recorded stream back to the sink it played to before.
    RestoreRouting { stream: StreamId, sink: SinkId },
}

impl CleanupStep {
    /// Log line announcing the step
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnloadCombinedSink { .. } => "Removing combined sink and module...",
            Self::RestoreRouting { .. } => "Moving stream back to its original sink...",
        }
    }
}

impl fmt::Display for CleanupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnloadCombinedSink { module: Some(id) } => write!(f, "unload module {}", id),
            Self::UnloadCombinedSink { module: None } => write!(f, "unload module (none loaded)"),
            Self::RestoreRouting { stream, sink } => {
                write!(f, "move stream {} to sink {}", stream, sink)
            }
        }
    }
}

/// State of one recording session.
///
/// Tracks what has been changed on the sound server so the changes can be
/// undone however the session ends. The combined sink's module and sink ids
/// are recorded separately because the module can exist before its sink has
/// been resolved.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    input: AudioInput,
    format: AudioFormat,
    destination: PathBuf,
    module: Option<ModuleId>,
    combined_sink: Option<SinkId>,
}

impl RecordingSession {
    /// Start a session for the chosen input
    pub fn new(input: AudioInput, format: AudioFormat, destination: impl Into<PathBuf>) -> Self {
        Self {
            input,
            format,
            destination: destination.into(),
            module: None,
            combined_sink: None,
        }
    }

    pub fn input(&self) -> &AudioInput {
        &self.input
    }

    pub fn stream(&self) -> StreamId {
        self.input.stream
    }

    /// Sink the stream played to when the session started
    pub fn original_sink(&self) -> SinkId {
        self.input.sink
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Record the module id returned when the combined sink was loaded
    pub fn attach_module(&mut self, module: ModuleId) {
        self.module = Some(module);
    }

    /// Record the resolved id of the combined sink
    pub fn attach_combined_sink(&mut self, sink: SinkId) {
        self.combined_sink = Some(sink);
    }

    pub fn module(&self) -> Option<ModuleId> {
        self.module
    }

    /// The combined sink, once both of its ids are known
    pub fn combined(&self) -> Option<CombinedSinkHandle> {
        match (self.module, self.combined_sink) {
            (Some(module), Some(sink)) => Some(CombinedSinkHandle { module, sink }),
            _ => None,
        }
    }

    /// Undo actions in the order they must run.
    ///
    /// Always two steps: the module unload comes first, then the stream is
    /// moved back. Each is independent of the other's outcome.
    pub fn cleanup_plan(&self) -> Vec<CleanupStep> {
        vec![
            CleanupStep::UnloadCombinedSink {
                module: self.module,
            },
            CleanupStep::RestoreRouting {
                stream: self.stream(),
                sink: self.original_sink(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RecordingSession {
        let input = AudioInput::new("input", SinkId::new(100), StreamId::new(1));
        RecordingSession::new(input, AudioFormat::Wav, "/tmp/foo.wav")
    }

    #[test]
    fn new_session_has_no_combined_sink() {
        let session = session();
        assert!(session.module().is_none());
        assert!(session.combined().is_none());
        assert_eq!(session.original_sink(), SinkId::new(100));
        assert_eq!(session.stream(), StreamId::new(1));
        assert_eq!(session.destination(), Path::new("/tmp/foo.wav"));
    }

    #[test]
    fn combined_requires_module_and_sink() {
        let mut session = session();
        session.attach_module(ModuleId::new(111));
        assert!(session.combined().is_none());

        session.attach_combined_sink(SinkId::new(99));
        assert_eq!(
            session.combined(),
            Some(CombinedSinkHandle {
                module: ModuleId::new(111),
                sink: SinkId::new(99),
            })
        );
    }

    #[test]
    fn cleanup_plan_before_module_load() {
        let plan = session().cleanup_plan();
        assert_eq!(
            plan,
            vec![
                CleanupStep::UnloadCombinedSink { module: None },
                CleanupStep::RestoreRouting {
                    stream: StreamId::new(1),
                    sink: SinkId::new(100),
                },
            ]
        );
    }

    #[test]
    fn cleanup_plan_unloads_recorded_module_first() {
        let mut session = session();
        session.attach_module(ModuleId::new(111));
        let plan = session.cleanup_plan();
        assert_eq!(
            plan[0],
            CleanupStep::UnloadCombinedSink {
                module: Some(ModuleId::new(111))
            }
        );
        assert!(matches!(plan[1], CleanupStep::RestoreRouting { .. }));
    }

    #[test]
    fn cleanup_step_display() {
        let step = CleanupStep::RestoreRouting {
            stream: StreamId::new(1),
            sink: SinkId::new(100),
        };
        assert_eq!(step.to_string(), "move stream 1 to sink 100");
    }
}
