//! Configuration for the portal.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML config file, and `TRANSPARENCIA_*` environment
//! variables. The backend base URL is the one value deployments must supply;
//! the observed hard-coded literals all collapse into it.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "transparencia.toml";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the document backend.
    pub backend_url: String,
    /// User agent for backend requests.
    pub user_agent: String,
    /// Backend request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3001".to_string(),
            user_agent: "Transparencia/0.3".to_string(),
            request_timeout: 30,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the document backend.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Backend request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Load the configuration file. A missing file is not an error; a file
    /// that exists but does not parse is.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref backend_url) = self.backend_url {
            settings.backend_url = backend_url.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
    }
}

/// Apply `TRANSPARENCIA_*` environment overrides.
fn apply_env(settings: &mut Settings) {
    if let Ok(backend_url) = std::env::var("TRANSPARENCIA_BACKEND_URL") {
        settings.backend_url = backend_url;
    }
    if let Ok(user_agent) = std::env::var("TRANSPARENCIA_USER_AGENT") {
        settings.user_agent = user_agent;
    }
    if let Ok(timeout) = std::env::var("TRANSPARENCIA_REQUEST_TIMEOUT") {
        if let Ok(timeout) = timeout.parse() {
            settings.request_timeout = timeout;
        }
    }
}

/// Load settings from the config file and environment, then validate.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let config = Config::load(config_path)?;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    apply_env(&mut settings);

    url::Url::parse(&settings.backend_url)
        .with_context(|| format!("invalid backend URL {:?}", settings.backend_url))?;

    Ok(settings)
}
