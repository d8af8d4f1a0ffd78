//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! variables override individual fields:
//!
//! | Variable          | Field                                  |
//! |-------------------|----------------------------------------|
//! | `BIZTIME_CONFIG`  | path of the YAML file                  |
//! | `BIZTIME_HOST`    | `server.host`                          |
//! | `BIZTIME_PORT`    | `server.port`                          |
//! | `DATABASE_URL`    | `database.url`                         |
//! | `BIZTIME_STORAGE` | `storage` (`in-memory` or `postgres`)  |
//! | `BIZTIME_ENV`     | `test` switches to `database.test_url` |

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,

    /// Separate database used when `BIZTIME_ENV=test`
    pub test_url: String,

    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql:///biztime".to_string(),
            test_url: "postgresql:///biztime_test".to_string(),
            max_connections: 5,
        }
    }
}

/// Which [`BizStore`](crate::core::BizStore) backend the binary builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageKind {
    #[default]
    InMemory,
    Postgres,
}

impl std::str::FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in-memory" | "memory" => Ok(StorageKind::InMemory),
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            other => bail!("unknown storage backend: {}", other),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageKind,

    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The file named by `BIZTIME_CONFIG` (or defaults), then the process
    /// environment on top
    pub fn load() -> Result<Self> {
        let config = match std::env::var("BIZTIME_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides()
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("BIZTIME_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BIZTIME_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("invalid BIZTIME_PORT: {}", port))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(storage) = lookup("BIZTIME_STORAGE") {
            self.storage = storage.parse()?;
        }
        if lookup("BIZTIME_ENV").as_deref() == Some("test") {
            self.database.url = self.database.test_url.clone();
        }
        Ok(self)
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
