//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! seeding the object store, and cleaning up test events.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use snapwall_api::{create_app, create_app_state};
use snapwall_common::{
    AdminConfig, AppConfig, AppSettings, CorsConfig, Environment, RateLimitConfig, RedisConfig,
    S3Config, ServerConfig, UploadConfig,
};
use snapwall_storage::build_client;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Admin secret used by test servers
pub const TEST_ADMIN_TOKEN: &str = "integration-admin-token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    config: AppConfig,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server against the configured backing services
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let state = create_app_state(config.clone()).await?;
        let app = create_app(state);

        // Port 0: let the OS pick
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            config,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The configuration the server was started with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a DELETE request with a bearer token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Seed one object directly into the backing store
    pub async fn seed_object(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let client = build_client(&self.config.s3).await;
        client
            .put_object()
            .bucket(&self.config.s3.bucket)
            .key(key)
            .content_type("image/png")
            .body(bytes.into())
            .send()
            .await?;
        Ok(())
    }

    /// Seed `count` tiny objects under an event's `original/` prefix
    pub async fn seed_event(&self, slug: &str, count: usize) -> Result<()> {
        let client = build_client(&self.config.s3).await;
        let bytes = crate::fixtures::png_fixture(4, 4);
        for i in 0..count {
            client
                .put_object()
                .bucket(&self.config.s3.bucket)
                .key(format!("{slug}/original/img-{i:04}.png"))
                .content_type("image/png")
                .body(bytes.clone().into())
                .send()
                .await?;
        }
        Ok(())
    }

    /// Remove everything a test event created
    pub async fn cleanup_event(&self, slug: &str) {
        let _ = self
            .delete_auth(&format!("/api/purge?slug={slug}"), TEST_ADMIN_TOKEN)
            .await;
    }
}

/// Create a test configuration from the environment.
///
/// Rate limits are raised so concurrency tests never trip the limiter.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let env = |name: &str| {
        std::env::var(name).map_err(|_| anyhow::anyhow!("{name} not set"))
    };

    Ok(AppConfig {
        app: AppSettings {
            name: "snapwall-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        s3: S3Config {
            endpoint_url: std::env::var("S3_ENDPOINT_URL").ok(),
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "auto".to_string()),
            access_key_id: env("S3_ACCESS_KEY_ID")?,
            secret_access_key: env("S3_SECRET_ACCESS_KEY")?,
            bucket: env("S3_BUCKET")?,
            force_path_style: true,
        },
        redis: RedisConfig {
            url: env("REDIS_URL")?,
            max_connections: 16,
        },
        admin: AdminConfig {
            token: TEST_ADMIN_TOKEN.to_string(),
        },
        upload: UploadConfig {
            presign_ttl_secs: 900,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 2000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        public_base_url: None,
    })
}

/// Helper to check if the test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["REDIS_URL", "S3_BUCKET", "S3_ACCESS_KEY_ID", "S3_SECRET_ACCESS_KEY"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
