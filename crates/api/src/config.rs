//! Environment-driven configuration for the server and the object store.

use plinth_storage::s3::S3Config;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// HTTP server settings. Defaults suit local development; production
/// deployments override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (comma-separated in the env var).
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
        }
    }
}

/// Object store settings.
///
/// | Env Var                   | Default                        |
/// |---------------------------|--------------------------------|
/// | `STORAGE_BUCKET`          | `models`                       |
/// | `AWS_REGION`              | `us-east-1`                    |
/// | `STORAGE_ENDPOINT_URL`    | unset (real AWS S3)            |
/// | `STORAGE_PUBLIC_BASE_URL` | `http://localhost:9000/models` |
pub fn storage_config_from_env() -> S3Config {
    S3Config {
        bucket: env_or("STORAGE_BUCKET", "models"),
        region: env_or("AWS_REGION", "us-east-1"),
        endpoint_url: std::env::var("STORAGE_ENDPOINT_URL").ok(),
        public_base_url: env_or("STORAGE_PUBLIC_BASE_URL", "http://localhost:9000/models"),
    }
}
