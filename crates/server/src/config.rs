use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "SGPA_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads the file named by `SGPA_CONFIG` (if any), then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize app config")
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(addr) = lookup("SGPA_BIND_ADDR") {
            self.bind_addr = addr;
        }

        let db = &mut self.database;
        if let Some(url) = lookup("DATABASE_URL") {
            db.url = Some(url);
        }
        if let Some(host) = lookup("SGPA_DB_HOST") {
            db.host = host;
        }
        if let Some(port) = lookup("SGPA_DB_PORT") {
            db.port = port
                .parse()
                .with_context(|| format!("SGPA_DB_PORT is not a valid port: {port}"))?;
        }
        if let Some(user) = lookup("SGPA_DB_USER") {
            db.user = user;
        }
        if let Some(password) = lookup("SGPA_DB_PASSWORD") {
            db.password = Some(password);
        }
        if let Some(name) = lookup("SGPA_DB_NAME") {
            db.name = name;
        }
        if let Some(max) = lookup("SGPA_DB_MAX_CONNECTIONS") {
            db.max_connections = max.parse().with_context(|| {
                format!("SGPA_DB_MAX_CONNECTIONS is not a valid number: {max}")
            })?;
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database: DatabaseConfig::default(),
        }
    }
}

/// Connection parameters. `url` wins over the individual parts when set.
#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_user")]
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        match &self.password {
            Some(password) => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user, password, self.host, self.port, self.name
            ),
            None => format!(
                "mysql://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            ),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: None,
            name: default_db_name(),
            max_connections: default_max_connections(),
        }
    }
}

// Keeps credentials out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "sgpa".to_string()
}

fn default_db_name() -> String {
    "sgpa_db".to_string()
}

fn default_max_connections() -> u32 {
    10
}
