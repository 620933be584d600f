use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::domain::{Credentials, Settings};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "HyExpress";
const APP_NAME: &str = "FreightQuoteDesk";

pub const ENV_APP_TOKEN: &str = "HY_APP_TOKEN";
pub const ENV_APP_KEY: &str = "HY_APP_KEY";
pub const ENV_ENDPOINT: &str = "HY_ENDPOINT";

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Loads settings from disk (defaults when absent or unreadable) and applies
/// environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = settings_file()
        .and_then(|path| read_settings(&path))
        .unwrap_or_default();
    apply_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn read_settings(path: &Path) -> Option<Settings> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            Some(settings)
        }
        Err(err) => {
            warn!("ignoring unreadable settings file {}: {err}", path.display());
            None
        }
    }
}

/// Environment values win over the file. Blank values are ignored.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(endpoint) = non_blank(ENV_ENDPOINT) {
        settings.provider.endpoint = endpoint;
    }

    let token = non_blank(ENV_APP_TOKEN);
    let key = non_blank(ENV_APP_KEY);
    if token.is_some() || key.is_some() {
        let current = &settings.provider.credentials;
        let merged = Credentials::new(
            token.unwrap_or_else(|| current.app_token.clone()),
            key.unwrap_or_else(|| current.app_key.clone()),
        );
        settings.provider.credentials = merged;
        settings.provider.credentials_from_env = true;
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_file().ok_or(SettingsError::StorageUnavailable)?;
    write_settings(&path, settings)?;
    info!("saved settings to {}", path.display());
    Ok(())
}

fn write_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut snapshot = settings.clone();
    if snapshot.provider.credentials_from_env {
        snapshot.provider.credentials = Credentials::default();
    }
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
