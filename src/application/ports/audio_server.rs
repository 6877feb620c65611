//! Sound server control port

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::{ModuleId, SinkId, StreamId};

/// Property carrying the application identity of a sink input
pub const APPLICATION_NAME_PROPERTY: &str = "application.name";

/// Errors talking to the sound server.
///
/// All of these are connectivity-class failures; nothing in the crate
/// retries them.
#[derive(Debug, Clone, Error)]
pub enum AudioServerError {
    #[error("{0} not found. Please install pulseaudio-utils (or pipewire-pulse).")]
    ToolNotFound(String),

    #[error("Cannot reach the sound server: {0}")]
    Unreachable(String),

    #[error("Sound server rejected {operation}: {message}")]
    Rejected { operation: String, message: String },

    #[error("Unexpected sound server response to {operation}: {message}")]
    InvalidResponse { operation: String, message: String },
}

/// A sink as reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkInfo {
    pub index: SinkId,
    pub name: String,
    /// Name of the active port, `None` for sinks without one
    pub active_port: Option<String>,
}

impl SinkInfo {
    pub fn has_active_port(&self) -> bool {
        self.active_port.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// A sink input (application stream) as reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkInputInfo {
    pub index: StreamId,
    pub sink: SinkId,
    pub properties: HashMap<String, String>,
}

impl SinkInputInfo {
    /// The stream's application name, if it exposes one
    pub fn application_name(&self) -> Option<&str> {
        self.properties
            .get(APPLICATION_NAME_PROPERTY)
            .map(String::as_str)
    }
}

/// Port for reading and mutating the sound server's routing graph.
///
/// Every call is a single request/response.
#[async_trait]
pub trait AudioServer: Send + Sync {
    /// List all sinks in server order
    async fn list_sinks(&self) -> Result<Vec<SinkInfo>, AudioServerError>;

    /// List all sink inputs in server order
    async fn list_sink_inputs(&self) -> Result<Vec<SinkInputInfo>, AudioServerError>;

    /// Load a module and return its index
    async fn load_module(&self, name: &str, args: &str) -> Result<ModuleId, AudioServerError>;

    /// Unload a previously loaded module
    async fn unload_module(&self, module: ModuleId) -> Result<(), AudioServerError>;

    /// Route a stream to a sink
    async fn move_sink_input(&self, stream: StreamId, sink: SinkId)
        -> Result<(), AudioServerError>;

    /// Set the default sink by name or stringified index
    async fn set_default_sink(&self, sink: &str) -> Result<(), AudioServerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_port_detection() {
        let mut sink = SinkInfo {
            index: SinkId::new(0),
            name: "speakers".to_string(),
            active_port: Some("analog-output-speaker".to_string()),
        };
        assert!(sink.has_active_port());

        sink.active_port = Some(String::new());
        assert!(!sink.has_active_port());

        sink.active_port = None;
        assert!(!sink.has_active_port());
    }

    #[test]
    fn application_name_lookup() {
        let mut input = SinkInputInfo {
            index: StreamId::new(4),
            sink: SinkId::new(0),
            properties: HashMap::new(),
        };
        assert!(input.application_name().is_none());

        input
            .properties
            .insert(APPLICATION_NAME_PROPERTY.to_string(), "Firefox".to_string());
        assert_eq!(input.application_name(), Some("Firefox"));
    }
}
