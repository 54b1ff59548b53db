//! Configuration management

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_PERMISSION_DOMAIN;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    /// Route name -> path pattern, e.g. `"facilities:manage" = "/facilities/manage/"`.
    #[serde(default)]
    pub routes: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub log_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// Prefix of structured permissions: `{domain}.{action}_{model_name}`.
    pub permission_domain: String,
    /// Outcome of the permission gate when no user is present.
    pub allow_anonymous_default: bool,
    /// JSON menu catalog; the built-in catalog is used when absent.
    pub menu_file: Option<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            permission_domain: DEFAULT_PERMISSION_DOMAIN.to_string(),
            allow_anonymous_default: true,
            menu_file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DirectorySettings {
    /// JSON file of portal users served by the in-memory directory.
    pub users_file: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-server")?
            .set_default("navigation.permission_domain", DEFAULT_PERMISSION_DOMAIN)?
            .set_default("navigation.allow_anonymous_default", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
