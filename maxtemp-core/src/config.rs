use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/predict-temperature";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Prediction endpoint. Example TOML:
    /// endpoint = "http://localhost:3001/predict-temperature"
    pub endpoint: Option<String>,
}

impl Config {
    /// Configured endpoint, or the default one.
    pub fn endpoint_url(&self) -> Result<Url> {
        parse_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Endpoint to use, preferring an explicit override over the config file.
    pub fn resolve_endpoint(&self, endpoint_override: Option<&str>) -> Result<Url> {
        match endpoint_override {
            Some(raw) => parse_endpoint(raw),
            None => self.endpoint_url(),
        }
    }

    /// Validate and store the endpoint.
    pub fn set_endpoint(&mut self, raw: &str) -> Result<()> {
        let url = parse_endpoint(raw)?;
        self.endpoint = Some(url.to_string());
        Ok(())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "maxtemp", "maxtemp-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("Invalid prediction endpoint '{raw}'"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "Invalid prediction endpoint '{raw}': unsupported scheme '{other}'.\n\
             Hint: run `maxtemp configure` and enter an http(s) URL."
        )),
    }
}
