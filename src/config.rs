//! Runtime configuration read from the environment.
//!
//! The container image is started with `NODE_ENV`, `PORT` and `STORAGE_DIR`;
//! the same variables drive a local `dx serve`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::constants::CONTAINER_PORT;
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub storage_dir: PathBuf,
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: CONTAINER_PORT,
            storage_dir: PathBuf::from("./data"),
            environment: Environment::Development,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT={:?}: {}", raw, e)))?,
            None => defaults.port,
        };

        let storage_dir = lookup("STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let environment = match lookup("NODE_ENV").as_deref().map(str::trim) {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self { port, storage_dir, environment })
    }
}
