//! Input directory: read-only queries against the sound server

use crate::domain::audio::{AudioInput, SinkId, SinkSnapshot};

use super::ports::{AudioServer, AudioServerError};

/// Read-only view of the sound server's outputs and application streams.
///
/// Never mutates server state and never retries; every failure is returned
/// to the caller as is.
pub struct InputDirectory<'a, S: AudioServer + ?Sized> {
    server: &'a S,
}

impl<'a, S: AudioServer + ?Sized> InputDirectory<'a, S> {
    pub fn new(server: &'a S) -> Self {
        Self { server }
    }

    /// Sinks currently reporting an active port, in server order
    pub async fn list_active_outputs(&self) -> Result<Vec<SinkSnapshot>, AudioServerError> {
        let sinks = self.server.list_sinks().await?;

        Ok(sinks
            .into_iter()
            .filter(|sink| sink.has_active_port())
            .map(|sink| SinkSnapshot::new(sink.index, sink.name))
            .collect())
    }

    /// Streams that carry an application name, in server order.
    ///
    /// Streams without one cannot be presented to a user and are dropped.
    pub async fn list_routable_inputs(&self) -> Result<Vec<AudioInput>, AudioServerError> {
        let inputs = self.server.list_sink_inputs().await?;

        Ok(inputs
            .into_iter()
            .filter_map(|input| {
                let name = input.application_name()?.to_string();
                Some(AudioInput::new(name, input.sink, input.index))
            })
            .collect())
    }

    /// Index of the sink named exactly `name`, if one exists right now
    pub async fn find_sink_by_name(&self, name: &str) -> Result<Option<SinkId>, AudioServerError> {
        let sinks = self.server.list_sinks().await?;

        Ok(sinks
            .into_iter()
            .find(|sink| sink.name == name)
            .map(|sink| sink.index))
    }
}
