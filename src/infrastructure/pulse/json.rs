//! Parsing of `pactl --format=json` output

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{SinkInfo, SinkInputInfo};
use crate::domain::audio::{ModuleId, SinkId, StreamId};

#[derive(Debug, Deserialize)]
struct RawSink {
    index: u32,
    name: String,
    #[serde(default)]
    active_port: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSinkInput {
    index: u32,
    sink: u32,
    #[serde(default)]
    properties: HashMap<String, Value>,
}

/// Parse the output of `pactl --format=json list sinks`
pub fn parse_sinks(json: &str) -> Result<Vec<SinkInfo>, serde_json::Error> {
    let raw: Vec<RawSink> = serde_json::from_str(json)?;

    Ok(raw
        .into_iter()
        .map(|sink| SinkInfo {
            index: SinkId::new(sink.index),
            name: sink.name,
            active_port: sink.active_port,
        })
        .collect())
}

/// Parse the output of `pactl --format=json list sink-inputs`
pub fn parse_sink_inputs(json: &str) -> Result<Vec<SinkInputInfo>, serde_json::Error> {
    let raw: Vec<RawSinkInput> = serde_json::from_str(json)?;

    Ok(raw
        .into_iter()
        .map(|input| SinkInputInfo {
            index: StreamId::new(input.index),
            sink: SinkId::new(input.sink),
            properties: input
                .properties
                .into_iter()
                .map(|(key, value)| (key, property_text(value)))
                .collect(),
        })
        .collect())
}

/// Parse the module index printed by `pactl load-module`
pub fn parse_module_index(stdout: &str) -> Option<ModuleId> {
    stdout.lines().rev().find_map(|line| line.parse().ok())
}

fn property_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
