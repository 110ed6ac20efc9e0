//! Configuration loading

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, Environment, RateLimitConfig,
    RedisConfig, S3Config, ServerConfig, UploadConfig,
};
