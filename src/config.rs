// Configuration module
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// 0 = one worker per CPU core
    #[serde(default)]
    pub workers: usize,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// RocksDB directory
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Root directory for uploaded media files
    #[serde(default = "default_media_dir")]
    pub media_dir: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// `["*"]` or empty allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            media_dir: default_media_dir(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_file(),
            log_to_console: true,
            format: default_log_format(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age: default_cors_max_age(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "./data/pantry".to_string()
}

fn default_media_dir() -> String {
    "./data/media".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "./logs/server.log".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> usize {
    3600
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        // Override with environment variables if present
        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides for deployment settings
    ///
    /// Supported environment variables:
    /// - PANTRY_SERVER_HOST: Override server.host
    /// - PANTRY_SERVER_PORT: Override server.port
    /// - PANTRY_LOG_LEVEL: Override logging.level
    /// - PANTRY_LOG_FILE: Override logging.file_path
    /// - PANTRY_LOG_TO_CONSOLE: Override logging.log_to_console
    /// - PANTRY_DATA_DIR: Override storage.data_dir
    /// - PANTRY_MEDIA_DIR: Override storage.media_dir
    ///
    /// Environment variables take precedence over config.toml values
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        if let Ok(host) = env::var("PANTRY_SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("PANTRY_SERVER_PORT") {
            self.server.port = port_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PANTRY_SERVER_PORT value: {}", port_str))?;
        }

        if let Ok(level) = env::var("PANTRY_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(path) = env::var("PANTRY_LOG_FILE") {
            self.logging.file_path = path;
        }

        if let Ok(val) = env::var("PANTRY_LOG_TO_CONSOLE") {
            self.logging.log_to_console =
                val.to_lowercase() == "true" || val == "1" || val.to_lowercase() == "yes";
        }

        if let Ok(path) = env::var("PANTRY_DATA_DIR") {
            self.storage.data_dir = path;
        }

        if let Ok(path) = env::var("PANTRY_MEDIA_DIR") {
            self.storage.media_dir = path;
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        // bcrypt accepts costs 4..=31
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(anyhow::anyhow!(
                "Invalid bcrypt cost {}. Must be between 4 and 31",
                self.auth.bcrypt_cost
            ));
        }

        if self.storage.data_dir.is_empty() || self.storage.media_dir.is_empty() {
            return Err(anyhow::anyhow!("Storage directories cannot be empty"));
        }

        Ok(())
    }
}
