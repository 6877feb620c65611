//! Record session use case
//!
//! Routes one application stream into a transient combined sink, records the
//! sink's monitor, and undoes the routing however the recording ends.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::audio::{
    combine_sink_args, combined_monitor_source, AudioFormat, AudioInput, CombinedSinkHandle,
    COMBINED_SINK_NAME, COMBINE_SINK_MODULE,
};
use crate::domain::session::{CleanupStep, RecordingSession};

use super::directory::InputDirectory;
use super::interrupt::Interrupt;
use super::ports::{AudioServer, AudioServerError, MonitorRecorder, RecordingError};

/// Failures during setup or recording, other than a user interrupt
#[derive(Debug, Error)]
pub enum SessionFault {
    #[error(transparent)]
    AudioServer(#[from] AudioServerError),

    #[error(transparent)]
    Recording(RecordingError),

    #[error("No active output device to combine")]
    NoActiveOutputs,

    #[error("Combined sink '{0}' not found after loading its module")]
    CombinedSinkMissing(String),
}

/// Why a session stopped before finishing normally
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Recording stopped by user")]
    Cancelled,

    #[error("Recording session failed: {0}")]
    Fault(#[from] SessionFault),
}

impl From<AudioServerError> for SessionError {
    fn from(err: AudioServerError) -> Self {
        Self::Fault(SessionFault::AudioServer(err))
    }
}

impl From<RecordingError> for SessionError {
    fn from(err: RecordingError) -> Self {
        match err {
            RecordingError::Cancelled => Self::Cancelled,
            other => Self::Fault(SessionFault::Recording(other)),
        }
    }
}

/// Input parameters for the record session use case
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Stream to record
    pub input: AudioInput,
    /// Container format of the output file
    pub format: AudioFormat,
    /// Output file
    pub destination: PathBuf,
    /// Stops the session at whatever step it is in
    pub interrupt: Interrupt,
}

/// How the setup and recording part of a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Cancelled,
    Faulted(String),
}

/// Result of one cleanup step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Done,
    /// Nothing to undo
    Skipped,
    /// The step failed; the failure was swallowed
    Failed(String),
}

/// Output from the record session use case
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub end: SessionEnd,
    /// Combined sink used by the session, if it got that far
    pub combined: Option<CombinedSinkHandle>,
    /// Every cleanup step in execution order
    pub cleanup: Vec<(CleanupStep, CleanupOutcome)>,
}

impl SessionReport {
    pub fn is_cancelled(&self) -> bool {
        self.end == SessionEnd::Cancelled
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.end, SessionEnd::Faulted(_))
    }
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct SessionCallbacks {
    /// Called right before the recorder starts
    pub on_recording_start: Option<Box<dyn Fn(&AudioInput) + Send + Sync>>,
}

/// One-session recording use case
pub struct RecordSessionUseCase<S, R>
where
    S: AudioServer,
    R: MonitorRecorder,
{
    server: S,
    recorder: R,
}

impl<S, R> RecordSessionUseCase<S, R>
where
    S: AudioServer,
    R: MonitorRecorder,
{
    /// Create a new use case instance
    pub fn new(server: S, recorder: R) -> Self {
        Self { server, recorder }
    }

    /// Run one session end to end.
    ///
    /// Never fails: a cancel or fault is logged, the routing is restored as
    /// far as possible, and the outcome is returned in the report.
    pub async fn execute(&self, request: SessionRequest, callbacks: SessionCallbacks) -> SessionReport {
        let mut session = RecordingSession::new(request.input, request.format, request.destination);

        let end = match self
            .route_and_record(&mut session, &request.interrupt, &callbacks)
            .await
        {
            Ok(()) => {
                debug!("recorder exited");
                SessionEnd::Completed
            }
            Err(SessionError::Cancelled) => {
                info!("stopped recording");
                SessionEnd::Cancelled
            }
            Err(SessionError::Fault(fault)) => {
                error!(error = ?fault, "{}", fault);
                SessionEnd::Faulted(fault.to_string())
            }
        };

        let cleanup = self.unwind(&session).await;

        SessionReport {
            end,
            combined: session.combined(),
            cleanup,
        }
    }

    async fn route_and_record(
        &self,
        session: &mut RecordingSession,
        interrupt: &Interrupt,
        callbacks: &SessionCallbacks,
    ) -> Result<(), SessionError> {
        tokio::select! {
            biased;

            routed = self.route(session) => match routed {
                // A terminal Ctrl+C also reaches the pactl child
                Err(_) if interrupt.is_triggered() => return Err(SessionError::Cancelled),
                other => other?,
            },
            _ = interrupt.triggered() => return Err(SessionError::Cancelled),
        }

        info!("Start recording... stop it with Ctrl+C");
        if let Some(ref cb) = callbacks.on_recording_start {
            cb(session.input());
        }

        self.recorder
            .record(
                &combined_monitor_source(),
                session.format(),
                session.destination(),
                interrupt,
            )
            .await?;

        Ok(())
    }

    /// Put the combined sink in place and move the stream onto it
    async fn route(&self, session: &mut RecordingSession) -> Result<(), SessionError> {
        let directory = InputDirectory::new(&self.server);

        let outputs = directory.list_active_outputs().await?;
        debug!(?outputs, "active sinks");
        let fallback = outputs.first().ok_or(SessionFault::NoActiveOutputs)?.id;

        let module = self
            .server
            .load_module(COMBINE_SINK_MODULE, &combine_sink_args(&outputs))
            .await?;
        session.attach_module(module);
        debug!(%module, "loaded combined sink module");

        let sink = directory
            .find_sink_by_name(COMBINED_SINK_NAME)
            .await?
            .ok_or_else(|| SessionFault::CombinedSinkMissing(COMBINED_SINK_NAME.to_string()))?;
        session.attach_combined_sink(sink);
        debug!(%sink, "created combined sink");

        self.server.move_sink_input(session.stream(), sink).await?;

        // Everything else keeps playing on the first real output.
        self.server.set_default_sink(&fallback.to_string()).await?;

        Ok(())
    }

    async fn unwind(&self, session: &RecordingSession) -> Vec<(CleanupStep, CleanupOutcome)> {
        let mut outcomes = Vec::new();

        for step in session.cleanup_plan() {
            info!("{}", step.description());
            let outcome = self.run_cleanup(step).await;
            outcomes.push((step, outcome));
        }

        outcomes
    }

    async fn run_cleanup(&self, step: CleanupStep) -> CleanupOutcome {
        let result = match step {
            CleanupStep::UnloadCombinedSink { module: None } => return CleanupOutcome::Skipped,
            CleanupStep::UnloadCombinedSink {
                module: Some(module),
            } => self.server.unload_module(module).await,
            CleanupStep::RestoreRouting { stream, sink } => {
                self.server.move_sink_input(stream, sink).await
            }
        };

        match result {
            Ok(()) => CleanupOutcome::Done,
            Err(e) => {
                debug!(%step, error = %e, "cleanup step failed");
                CleanupOutcome::Failed(e.to_string())
            }
        }
    }
}
