use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Settings structure to hold global configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Server
    pub listen_address: String,
    pub listen_port: u16,
    pub log_level: String,

    // Subscription fetch
    /// Used when a request carries no `url` parameter
    pub default_url: Option<String>,
    pub user_agent: String,
    /// Seconds
    pub fetch_timeout: u64,

    /// Attachment filename hinted to the client
    pub filename: String,

    pub template: TemplateSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1".to_string(),
            listen_port: 25500,
            log_level: "info".to_string(),
            default_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: DEFAULT_TIMEOUT,
            filename: "clash.yaml".to_string(),
            template: TemplateSettings::default(),
        }
    }
}

/// The fixed parts of the emitted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,
    pub health_check: HealthCheckSettings,
    pub groups: GroupNames,
    /// Country code routed DIRECT by the GEOIP rule
    pub bypass_country: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            port: 7890,
            socks_port: 7891,
            allow_lan: false,
            mode: "rule".to_string(),
            log_level: "info".to_string(),
            external_controller: "127.0.0.1:9090".to_string(),
            health_check: HealthCheckSettings::default(),
            groups: GroupNames::default(),
            bypass_country: "CN".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckSettings {
    pub url: String,
    /// Seconds
    pub interval: u32,
    /// Milliseconds
    pub tolerance: u32,
}

impl Default for HealthCheckSettings {
    fn default() -> Self {
        Self {
            url: "http://www.gstatic.com/generate_204".to_string(),
            interval: 300,
            tolerance: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupNames {
    pub select: String,
    pub manual: String,
    pub auto: String,
    pub fallback: String,
}

impl Default for GroupNames {
    fn default() -> Self {
        Self {
            select: "Proxy".to_string(),
            manual: "Manual".to_string(),
            auto: "Auto".to_string(),
            fallback: "Fallback".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML or TOML file, chosen by extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => bail!(
                "unsupported settings format for {}, expected .yml, .yaml or .toml",
                path.display()
            ),
        }
        .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // an empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `address:port`, unless the address already names a port.
    pub fn listen_addr(&self) -> String {
        let address = self.listen_address.trim();
        if address.is_empty() {
            format!("127.0.0.1:{}", self.listen_port)
        } else if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:{}", address, self.listen_port)
        }
    }
}
