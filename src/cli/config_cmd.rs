//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::audio::{AudioFormat, SampleFormat};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let value = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    match key {
        "audio_format" => config.audio_format = value.clone(),
        "sample_format" => config.sample_format = value.clone(),
        "server" => config.server = value.clone(),
        _ => unreachable!(), // Already validated
    }
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value.as_deref().unwrap_or(NOT_SET)));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    let value = match key {
        "audio_format" => config.audio_format,
        "sample_format" => config.sample_format,
        "server" => config.server,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "audio_format",
        config.audio_format.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "sample_format",
        config.sample_format.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value("server", config.server.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a value and return what gets stored. An empty server unsets it.
fn normalize_config_value(key: &str, value: &str) -> Result<Option<String>, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "audio_format" => value
            .parse::<AudioFormat>()
            .map(|f| Some(f.to_string()))
            .map_err(|e| invalid(e.to_string())),
        "sample_format" => value
            .parse::<SampleFormat>()
            .map(|f| Some(f.to_string()))
            .map_err(|e| invalid(e.to_string())),
        "server" if value.trim().is_empty() => Ok(None),
        _ => Ok(Some(value.trim().to_string())),
    }
}
