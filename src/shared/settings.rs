use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::shared::error::{AppError, AppResult};

/// Environment variable that overrides the stored API credential.
const API_KEY_ENV: &str = "RAPIDAPI_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub api_keys: ApiKeys,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeys {
    pub rapidapi_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub default_target_lang: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_keys: ApiKeys {
                rapidapi_key: String::new(),
            },
            preferences: UserPreferences {
                default_target_lang: "es".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "lingua", "lingua-widgets")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::System("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to_disk().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Validation(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save_to_disk(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the API credential: environment variable first, stored key second.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(env_key) = std::env::var(API_KEY_ENV) {
            if !env_key.trim().is_empty() {
                return Some(env_key);
            }
        }
        if self.api_keys.rapidapi_key.trim().is_empty() {
            None
        } else {
            Some(self.api_keys.rapidapi_key.clone())
        }
    }
}
