//! Portal configuration and the small amount of user preference we remember.
//!
//! Defaults are compiled in. On the web, overrides come from `localStorage`;
//! on desktop, from JSON files in the platform config directory.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "otchizna.config";
#[cfg(target_arch = "wasm32")]
const PREFERENCES_KEY: &str = "otchizna.preferences";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_FILE: &str = "config.json";
#[cfg(not(target_arch = "wasm32"))]
const PREFERENCES_FILE: &str = "preferences.json";

const DEFAULT_STORE_FILE_ENDPOINT: &str =
    "https://functions.poehali.dev/922c78c5-1c33-44e2-aa7d-c38249cd269b";
const DEFAULT_MEDIA_API_ENDPOINT: &str =
    "https://functions.poehali.dev/8cdb8115-479c-47eb-8bba-55fcc3937026";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Receives base64 files, answers with their public URL.
    pub store_file_endpoint: String,
    /// Lists (GET) and persists (POST) media metadata.
    pub media_api_endpoint: String,
    #[serde(deserialize_with = "clamped_volume")]
    pub default_volume: u8,
    pub skip_seconds: f64,
    pub toast_timeout_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            store_file_endpoint: DEFAULT_STORE_FILE_ENDPOINT.to_string(),
            media_api_endpoint: DEFAULT_MEDIA_API_ENDPOINT.to_string(),
            default_volume: 70,
            skip_seconds: 10.0,
            toast_timeout_ms: 4000,
        }
    }
}

impl PortalConfig {
    /// Bring out-of-range values back to something usable.
    pub fn normalized(mut self) -> Self {
        self.default_volume = self.default_volume.min(100);
        if !self.skip_seconds.is_finite() || self.skip_seconds <= 0.0 {
            self.skip_seconds = 10.0;
        }
        self.store_file_endpoint = self.store_file_endpoint.trim().to_string();
        self.media_api_endpoint = self.media_api_endpoint.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default, deserialize_with = "clamped_optional_volume")]
    pub volume: Option<u8>,
}

impl Preferences {
    pub fn volume_or(&self, fallback: u8) -> u8 {
        self.volume.unwrap_or(fallback).min(100)
    }
}

/// Stored volumes may be any JSON number; they land in `0..=100`.
fn clamp_stored_volume(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

fn clamped_volume<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    f64::deserialize(deserializer).map(clamp_stored_volume)
}

fn clamped_optional_volume<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u8>, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map(clamp_stored_volume))
}

/// Load the portal config, falling back to defaults when nothing usable is
/// stored.
pub fn load_config() -> PortalConfig {
    match read_config() {
        Ok(Some(config)) => config.normalized(),
        Ok(None) => PortalConfig::default(),
        Err(err) => {
            warn!(error = %err, "ignoring stored config");
            PortalConfig::default()
        }
    }
}

pub fn load_preferences() -> Preferences {
    match read_preferences() {
        Ok(prefs) => prefs.unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "ignoring stored preferences");
            Preferences::default()
        }
    }
}

pub fn save_volume(volume: u8) {
    let prefs = Preferences {
        volume: Some(volume.min(100)),
    };
    if let Err(err) = write_preferences(&prefs) {
        warn!(error = %err, "failed to save preferences");
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> Result<Option<PortalConfig>, ConfigError> {
    read_key(CONFIG_KEY)
}

#[cfg(target_arch = "wasm32")]
fn read_preferences() -> Result<Option<Preferences>, ConfigError> {
    read_key(PREFERENCES_KEY)
}

#[cfg(target_arch = "wasm32")]
fn write_preferences(prefs: &Preferences) -> Result<(), ConfigError> {
    LocalStorage::set(PREFERENCES_KEY, prefs).map_err(|e| ConfigError::Storage(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn read_key<T: serde::de::DeserializeOwned>(key: &str) -> Result<Option<T>, ConfigError> {
    use gloo_storage::errors::StorageError;

    match LocalStorage::get(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(StorageError::SerdeError(e)) => Err(ConfigError::Parse(e)),
        Err(e) => Err(ConfigError::Storage(e.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_dir() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("otchizna"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> Result<Option<PortalConfig>, ConfigError> {
    match config_dir() {
        Some(dir) => read_json(&dir.join(CONFIG_FILE)),
        None => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_preferences() -> Result<Option<Preferences>, ConfigError> {
    match config_dir() {
        Some(dir) => read_json(&dir.join(PREFERENCES_FILE)),
        None => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_preferences(prefs: &Preferences) -> Result<(), ConfigError> {
    let Some(dir) = config_dir() else {
        return Ok(());
    };
    write_json(&dir.join(PREFERENCES_FILE), prefs)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_json<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<Option<T>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_json<T: Serialize>(path: &std::path::Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: PortalConfig =
            serde_json::from_str(r#"{"skip_seconds": 15.0}"#).expect("parses");
        assert_eq!(config.skip_seconds, 15.0);
        assert_eq!(config.default_volume, 70);
        assert_eq!(config.store_file_endpoint, DEFAULT_STORE_FILE_ENDPOINT);
    }

    #[test]
    fn normalized_repairs_bad_values() {
        let config = PortalConfig {
            default_volume: 250,
            skip_seconds: -1.0,
            media_api_endpoint: "  https://api.example/media ".to_string(),
            ..PortalConfig::default()
        }
        .normalized();
        assert_eq!(config.default_volume, 100);
        assert_eq!(config.skip_seconds, 10.0);
        assert_eq!(config.media_api_endpoint, "https://api.example/media");
    }

    #[test]
    fn stored_volume_is_clamped() {
        let prefs = Preferences { volume: Some(180) };
        assert_eq!(prefs.volume_or(70), 100);
        assert_eq!(Preferences::default().volume_or(70), 70);
    }

    #[test]
    fn out_of_range_stored_volume_is_clamped_on_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE);

        std::fs::write(&path, r#"{"volume": 300}"#).expect("writes");
        let loud: Option<Preferences> = read_json(&path).expect("readable");
        assert_eq!(loud.map(|p| p.volume_or(70)), Some(100));

        std::fs::write(&path, r#"{"volume": -5}"#).expect("writes");
        let quiet: Option<Preferences> = read_json(&path).expect("readable");
        assert_eq!(quiet.map(|p| p.volume_or(70)), Some(0));
    }

    #[test]
    fn out_of_range_default_volume_keeps_the_rest_of_the_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{"default_volume": 300, "media_api_endpoint": "https://api.example/media"}"#,
        )
        .expect("writes");

        let config = read_json::<PortalConfig>(&path)
            .expect("readable")
            .expect("present")
            .normalized();
        assert_eq!(config.default_volume, 100);
        assert_eq!(config.media_api_endpoint, "https://api.example/media");

        std::fs::write(&path, r#"{"default_volume": -5}"#).expect("writes");
        let config = read_json::<PortalConfig>(&path)
            .expect("readable")
            .expect("present");
        assert_eq!(config.default_volume, 0);
    }

    #[test]
    fn json_files_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        assert_eq!(read_json::<Preferences>(&path).expect("readable"), None);
        write_json(&path, &Preferences { volume: Some(30) }).expect("writes");
        let loaded: Option<Preferences> = read_json(&path).expect("readable");
        assert_eq!(loaded.map(|p| p.volume_or(70)), Some(30));
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").expect("writes");
        assert!(matches!(
            read_json::<PortalConfig>(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
