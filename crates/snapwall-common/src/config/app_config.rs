//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub s3: S3Config,
    pub redis: RedisConfig,
    pub admin: AdminConfig,
    pub upload: UploadConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    /// Public base URL for direct image links (e.g. an R2 custom domain).
    /// When unset, listing responses carry raw object keys instead of URLs.
    pub public_base_url: Option<String>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Object store configuration (S3-compatible: R2, MinIO, AWS)
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Custom endpoint URL; None uses the SDK's default AWS resolution
    pub endpoint_url: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Path-style addressing, required by MinIO and some R2 setups
    #[serde(default = "default_force_path_style")]
    pub force_path_style: bool,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Admin authentication configuration.
///
/// A single static shared secret compared verbatim - no expiry, no scoping,
/// no rotation. This matches the system's stakes; it is not a token system.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub token: String,
}

/// Upload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Presigned PUT URL lifetime in seconds
    #[serde(default = "default_presign_ttl")]
    pub presign_ttl_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "snapwall".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_region() -> String {
    // R2 uses the pseudo-region "auto"
    "auto".to_string()
}

fn default_force_path_style() -> bool {
    true
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_presign_ttl() -> u64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            s3: S3Config {
                endpoint_url: env::var("S3_ENDPOINT_URL").ok(),
                region: env::var("S3_REGION").unwrap_or_else(|_| default_region()),
                access_key_id: env::var("S3_ACCESS_KEY_ID")
                    .map_err(|_| ConfigError::MissingVar("S3_ACCESS_KEY_ID"))?,
                secret_access_key: env::var("S3_SECRET_ACCESS_KEY")
                    .map_err(|_| ConfigError::MissingVar("S3_SECRET_ACCESS_KEY"))?,
                bucket: env::var("S3_BUCKET").map_err(|_| ConfigError::MissingVar("S3_BUCKET"))?,
                force_path_style: env::var("S3_FORCE_PATH_STYLE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_force_path_style),
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: env::var("REDIS_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
            },
            admin: AdminConfig {
                token: env::var("ADMIN_TOKEN").map_err(|_| ConfigError::MissingVar("ADMIN_TOKEN"))?,
            },
            upload: UploadConfig {
                presign_ttl_secs: env::var("UPLOAD_PRESIGN_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_presign_ttl),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            public_base_url: env::var("PUBLIC_BASE_URL").ok().filter(|s| !s.is_empty()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
