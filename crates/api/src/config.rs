//! Server configuration, read once at startup.

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server. Defaults suit local development;
/// deployments override them through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Allowed CORS origins, comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`, default `30`).
    pub request_timeout_secs: u64,
    /// Root directory for stored documents and insats files
    /// (`UPLOAD_DIR`, default `uploads`).
    pub upload_dir: String,
    /// Token signing settings, see [`JwtConfig::from_env`].
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read every setting from the environment, falling back to the
    /// defaults above. Malformed numeric values abort startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            jwt: JwtConfig::from_env(),
        }
    }
}
