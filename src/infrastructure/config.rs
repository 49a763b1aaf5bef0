//! Client configuration.
//!
//! Settings come from an optional JSON file in the working directory,
//! with environment variables layered on top. A missing file is fine -
//! the defaults point at a local service - but a file that exists and
//! does not parse is an error worth surfacing.

use serde::Deserialize;
use std::fs;

pub const CONFIG_FILE: &str = "tprj.json";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const API_URL_ENV: &str = "TPRJ_API_URL";
const API_TOKEN_ENV: &str = "TPRJ_API_TOKEN";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the project service API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
        }
    }
}

impl Config {
    /// Loads configuration for the current process: `tprj.json` if it
    /// exists, then environment overrides.
    pub fn load() -> Result<Self, String> {
        let mut config = match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::from_json(&content)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Reads configuration from a specific file.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid config file - {}", e))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            if !token.is_empty() {
                self.api_token = Some(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"api_url": "https://api.example.com"}"#).unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_from_json_full() {
        let config =
            Config::from_json(r#"{"api_url": "https://api.example.com", "api_token": "t0ken"}"#)
                .unwrap();
        assert_eq!(config.api_token.as_deref(), Some("t0ken"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let error = Config::from_json("not json").unwrap_err();
        assert!(error.contains("Invalid config file"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_url": "https://api.example.com/"}}"#).unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/");
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("definitely-missing.json").is_err());
    }
}
