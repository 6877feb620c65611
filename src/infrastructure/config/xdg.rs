//! TOML config file in the XDG config directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// `$XDG_CONFIG_HOME/apprec/config.toml`, or `~/.config/apprec/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self::with_path(default_location())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file a save goes through before it replaces the config
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> Result<(), ConfigError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| write_error(parent, e)),
            _ => Ok(()),
        }
    }
}

fn default_location() -> PathBuf {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("apprec").join("config.toml")
}

fn write_error(path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::WriteError(format!("{}: {}", path.display(), err))
}

fn render(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::empty()),
            Err(e) => {
                return Err(ConfigError::ReadError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        toml::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_parent().await?;

        let staging = self.staging_path();
        fs::write(&staging, render(config)?)
            .await
            .map_err(|e| write_error(&staging, e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| write_error(&self.path, e))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        self.ensure_parent().await?;

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ConfigError::AlreadyExists(
                    self.path.display().to_string(),
                ))
            }
            Err(e) => return Err(write_error(&self.path, e)),
        };

        file.write_all(render(&AppConfig::defaults())?.as_bytes())
            .await
            .map_err(|e| write_error(&self.path, e))?;
        file.flush().await.map_err(|e| write_error(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> XdgConfigStore {
        XdgConfigStore::with_path(dir.path().join("apprec").join("config.toml"))
    }

    #[test]
    fn default_location_ends_in_app_dir() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("apprec/config.toml"));
    }

    #[test]
    fn staging_file_sits_next_to_config() {
        let store = XdgConfigStore::with_path("/etc/apprec/config.toml");
        assert_eq!(
            store.staging_path(),
            PathBuf::from("/etc/apprec/config.toml.tmp")
        );
    }

    #[tokio::test]
    async fn missing_file_loads_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn partial_file_leaves_other_keys_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(dir.path().join("apprec")).unwrap();
        std::fs::write(
            store.path(),
            "sample_format = \"float32le\"\nserver = \"tcp:studio.local\"\n",
        )
        .unwrap();

        let config = store.load().await.unwrap();
        assert!(config.audio_format.is_none());
        assert_eq!(config.sample_format.as_deref(), Some("float32le"));
        assert_eq!(config.server.as_deref(), Some("tcp:studio.local"));
    }

    #[tokio::test]
    async fn broken_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(dir.path().join("apprec")).unwrap();
        std::fs::write(store.path(), "sample_format = [").unwrap();

        assert!(matches!(
            store.load().await,
            Err(ConfigError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn save_replaces_file_and_cleans_staging() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let config = AppConfig {
            server: Some("tcp:studio.local".to_string()),
            ..AppConfig::empty()
        };
        store.save(&config).await.unwrap();

        assert_eq!(store.load().await.unwrap(), config);
        assert!(!store.staging_path().exists());
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
