/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Values in `config.toml` (or the file given on the command line) are
    /// overridden by environment variables prefixed with `CATALOG_`, e.g.
    /// `CATALOG_SERVER__PORT` or `CATALOG_STORAGE__DATABASE_URL`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = config_path.unwrap_or_else(|| Path::new("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CATALOG")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "database URL is required (set CATALOG_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/catalog.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
