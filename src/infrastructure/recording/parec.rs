//! parec-based monitor recorder adapter

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};
use tracing::debug;

use crate::application::interrupt::Interrupt;
use crate::application::ports::{MonitorRecorder, RecordingError};
use crate::domain::audio::{AudioFormat, SampleFormat};

/// Default capture tool
pub const PAREC_PROGRAM: &str = "parec";

/// How the wait on parec ended
enum Ended {
    Interrupted,
    Exited(std::io::Result<ExitStatus>),
}

/// Records a monitor source with `parec` until it exits or the session is interrupted
pub struct ParecRecorder {
    program: String,
    sample_format: SampleFormat,
    server: Option<String>,
}

impl ParecRecorder {
    /// Create a new parec recorder
    pub fn new(sample_format: SampleFormat, server: Option<String>) -> Self {
        Self {
            program: PAREC_PROGRAM.to_string(),
            sample_format,
            server,
        }
    }

    /// Build parec args for recording
    fn build_parec_args(&self, source: &str, format: AudioFormat, destination: &Path) -> Vec<String> {
        let mut args = vec!["--verbose".to_string()];

        if let Some(ref server) = self.server {
            args.push(format!("--server={}", server));
        }

        args.extend([
            format!("--format={}", self.sample_format),
            "-d".to_string(),
            source.to_string(),
            format!("--file-format={}", format.file_format()),
            destination.to_string_lossy().to_string(),
        ]);

        args
    }

    /// Spawn parec process
    fn spawn_parec(&self, args: &[String]) -> Result<Child, RecordingError> {
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RecordingError::RecorderNotFound(self.program.clone())
                } else {
                    RecordingError::StartFailed(e.to_string())
                }
            })
    }

    /// Send signal to parec process
    fn send_signal(child: &Child, sig: Signal) -> Result<(), RecordingError> {
        if let Some(id) = child.id() {
            signal::kill(Pid::from_raw(id as i32), sig)
                .map_err(|e| RecordingError::RecordingFailed(format!("Signal failed: {}", e)))?;
        }
        Ok(())
    }
}

impl Default for ParecRecorder {
    fn default() -> Self {
        Self::new(SampleFormat::default(), None)
    }
}

#[async_trait]
impl MonitorRecorder for ParecRecorder {
    async fn record(
        &self,
        source: &str,
        format: AudioFormat,
        destination: &Path,
        interrupt: &Interrupt,
    ) -> Result<(), RecordingError> {
        let args = self.build_parec_args(source, format, destination);
        debug!(program = %self.program, ?args, "cmd list");

        let mut child = self.spawn_parec(&args)?;

        let ended = tokio::select! {
            biased;

            _ = interrupt.triggered() => Ended::Interrupted,
            status = child.wait() => Ended::Exited(status),
        };

        match ended {
            Ended::Interrupted => {
                // parec finalizes the file header on SIGINT
                debug!("forwarding interrupt to parec");
                if let Err(e) = Self::send_signal(&child, Signal::SIGINT) {
                    debug!(error = %e, "could not signal parec");
                }
                let _ = child.wait().await;

                Err(RecordingError::Cancelled)
            }
            Ended::Exited(status) => {
                let status = status.map_err(|e| {
                    RecordingError::RecordingFailed(format!("parec failed: {}", e))
                })?;
                debug!(%status, "parec exited");
                if interrupt.is_triggered() {
                    // parec got the terminal's SIGINT itself
                    return Err(RecordingError::Cancelled);
                }
                Ok(())
            }
        }
    }
}
