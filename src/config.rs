use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// When unset the service keeps products in memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub request_body_limit: usize,
    pub concurrency_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_body_limit: 1024 * 1024,
            concurrency_limit: 100,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let request_body_limit = env::var("REQUEST_BODY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.request_body_limit);
        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.concurrency_limit);
        Ok(Self {
            database_url,
            host,
            port,
            request_body_limit,
            concurrency_limit,
        })
    }
}
