//! Vault configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gate::{store::CookiePolicy, STORAGE_KEY};
use crate::leads::{convex::DEFAULT_MUTATION, LEAD_SOURCE};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// HTTP port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Directory served under /static (logo, favicon)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Lead capture backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Convex deployment URL. Leads are kept in memory when unset.
    #[serde(default)]
    pub deployment_url: Option<String>,

    /// Mutation function path
    #[serde(default = "default_mutation")]
    pub mutation: String,

    /// Source tag sent with every lead
    #[serde(default = "default_source")]
    pub source: String,

    /// Request timeout in seconds (unset = no local timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Cookie holding the unlocked visitor's first name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie lifetime in days
    #[serde(default = "default_cookie_max_age_days")]
    pub cookie_max_age_days: u64,

    /// Mark the cookie `Secure`
    #[serde(default)]
    pub secure_cookie: bool,
}

impl GateConfig {
    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy {
            key: self.cookie_name.clone(),
            max_age_secs: self.cookie_max_age_days * 24 * 60 * 60,
            secure: self.secure_cookie,
        }
    }
}

/// Links and branding rendered into the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// "Book Systems Audit" target
    #[serde(default = "default_audit_url")]
    pub audit_url: String,

    #[serde(default = "default_terms_url")]
    pub terms_url: String,

    #[serde(default = "default_privacy_url")]
    pub privacy_url: String,

    #[serde(default = "default_support_email")]
    pub support_email: String,

    /// Brand mark shown in the nav and the gate overlay
    #[serde(default = "default_logo_url")]
    pub logo_url: String,

    #[serde(default = "default_favicon_url")]
    pub favicon_url: String,

    /// Iconify web component script; empty disables icons
    #[serde(default = "default_icon_script")]
    pub icon_script_url: String,
}

// Defaults
fn default_bind_addr() -> String { "0.0.0.0".to_string() }
fn default_http_port() -> u16 { 3000 }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }
fn default_mutation() -> String { DEFAULT_MUTATION.to_string() }
fn default_source() -> String { LEAD_SOURCE.to_string() }
fn default_cookie_name() -> String { STORAGE_KEY.to_string() }
fn default_cookie_max_age_days() -> u64 { 400 } // browser cap
fn default_brand() -> String { "Exo Vault".to_string() }
fn default_home_url() -> String { "https://exoent.co/".to_string() }
fn default_audit_url() -> String { "#".to_string() }
fn default_terms_url() -> String { "https://exoent.co/terms".to_string() }
fn default_privacy_url() -> String { "https://exoent.co/privacy".to_string() }
fn default_support_email() -> String { "exo.corpmail@gmail.com".to_string() }
fn default_logo_url() -> String { "/static/logo-mark.svg".to_string() }
fn default_favicon_url() -> String { "/static/favicon.svg".to_string() }
fn default_icon_script() -> String {
    "https://code.iconify.design/iconify-icon/1.0.7/iconify-icon.min.js".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            http_port: default_http_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            deployment_url: None,
            mutation: default_mutation(),
            source: default_source(),
            timeout_secs: None,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_max_age_days: default_cookie_max_age_days(),
            secure_cookie: false,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            home_url: default_home_url(),
            audit_url: default_audit_url(),
            terms_url: default_terms_url(),
            privacy_url: default_privacy_url(),
            support_email: default_support_email(),
            logo_url: default_logo_url(),
            favicon_url: default_favicon_url(),
            icon_script_url: default_icon_script(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Read a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.http_port)
    }
}
