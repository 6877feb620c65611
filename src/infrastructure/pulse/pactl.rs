//! pactl-based sound server adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{AudioServer, AudioServerError, SinkInfo, SinkInputInfo};
use crate::domain::audio::{ModuleId, SinkId, StreamId};

use super::json::{parse_module_index, parse_sink_inputs, parse_sinks};

/// Default control tool
pub const PACTL_PROGRAM: &str = "pactl";

/// Sound server adapter driving `pactl`.
///
/// Works with PulseAudio and with PipeWire's pulse compatibility layer.
/// Listing requires JSON output support (pactl 16 or newer).
pub struct PactlAudioServer {
    program: String,
    server: Option<String>,
}

impl PactlAudioServer {
    /// Create an adapter for the default or the given server
    pub fn new(server: Option<String>) -> Self {
        Self {
            program: PACTL_PROGRAM.to_string(),
            server,
        }
    }

    /// Create an adapter and check that the server answers
    pub async fn connect(server: Option<String>) -> Result<Self, AudioServerError> {
        let adapter = Self::new(server);
        adapter.run("info", &["info"]).await?;
        Ok(adapter)
    }

    /// Build the full argument list for one pactl call
    fn build_args(&self, args: &[&str]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 1);
        if let Some(ref server) = self.server {
            full.push(format!("--server={}", server));
        }
        full.extend(args.iter().map(|a| a.to_string()));
        full
    }

    /// Run pactl and return its stdout
    async fn run(&self, operation: &str, args: &[&str]) -> Result<String, AudioServerError> {
        let args = self.build_args(args);
        debug!(program = %self.program, ?args, "running pactl");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AudioServerError::ToolNotFound(self.program.clone())
                } else {
                    AudioServerError::Unreachable(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("unknown error")
                .trim()
                .to_string();

            if is_connection_failure(&message) {
                return Err(AudioServerError::Unreachable(message));
            }
            return Err(AudioServerError::Rejected {
                operation: operation.to_string(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn invalid_response(operation: &str, err: impl ToString) -> AudioServerError {
        AudioServerError::InvalidResponse {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

/// pactl reports an unreachable server as "Connection failure: ..."
fn is_connection_failure(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("connection failure") || lower.contains("connection refused")
}

#[async_trait]
impl AudioServer for PactlAudioServer {
    async fn list_sinks(&self) -> Result<Vec<SinkInfo>, AudioServerError> {
        let stdout = self
            .run("list sinks", &["--format=json", "list", "sinks"])
            .await?;
        parse_sinks(&stdout).map_err(|e| Self::invalid_response("list sinks", e))
    }

    async fn list_sink_inputs(&self) -> Result<Vec<SinkInputInfo>, AudioServerError> {
        let stdout = self
            .run("list sink-inputs", &["--format=json", "list", "sink-inputs"])
            .await?;
        parse_sink_inputs(&stdout).map_err(|e| Self::invalid_response("list sink-inputs", e))
    }

    async fn load_module(&self, name: &str, args: &str) -> Result<ModuleId, AudioServerError> {
        let mut call = vec!["load-module", name];
        call.extend(args.split_whitespace());

        let stdout = self.run("load-module", &call).await?;
        parse_module_index(&stdout).ok_or_else(|| {
            Self::invalid_response("load-module", format!("no module index in {:?}", stdout))
        })
    }

    async fn unload_module(&self, module: ModuleId) -> Result<(), AudioServerError> {
        self.run("unload-module", &["unload-module", &module.to_string()])
            .await
            .map(|_| ())
    }

    async fn move_sink_input(
        &self,
        stream: StreamId,
        sink: SinkId,
    ) -> Result<(), AudioServerError> {
        self.run(
            "move-sink-input",
            &["move-sink-input", &stream.to_string(), &sink.to_string()],
        )
        .await
        .map(|_| ())
    }

    async fn set_default_sink(&self, sink: &str) -> Result<(), AudioServerError> {
        self.run("set-default-sink", &["set-default-sink", sink])
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_without_server() {
        let adapter = PactlAudioServer::new(None);
        assert_eq!(
            adapter.build_args(&["unload-module", "111"]),
            vec!["unload-module", "111"]
        );
    }

    #[test]
    fn args_with_server_come_first() {
        let adapter = PactlAudioServer::new(Some("tcp:studio.local".to_string()));
        assert_eq!(
            adapter.build_args(&["--format=json", "list", "sinks"]),
            vec!["--server=tcp:studio.local", "--format=json", "list", "sinks"]
        );
    }

    #[test]
    fn connection_failures_are_detected() {
        assert!(is_connection_failure("Connection failure: Connection refused"));
        assert!(is_connection_failure("connection refused"));
        assert!(!is_connection_failure("Failure: No such entity"));
    }

    #[tokio::test]
    async fn missing_binary_is_tool_not_found() {
        let adapter = PactlAudioServer {
            program: "apprec-test-no-such-pactl".to_string(),
            server: None,
        };
        let err = adapter.list_sinks().await.unwrap_err();
        assert!(matches!(err, AudioServerError::ToolNotFound(ref p) if p == "apprec-test-no-such-pactl"));
    }
}
