use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub account_service_url: String,
    pub account_service_timeout: Duration,
    pub frontend_url: Option<String>,
    pub product_service_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8030);
        let account_service_url = env::var("ACCOUNT_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("ACCOUNT_SERVICE_URL is not set"))?;
        let timeout_secs = env::var("ACCOUNT_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5);
        Ok(Self {
            database_url,
            host,
            port,
            account_service_url,
            account_service_timeout: Duration::from_secs(timeout_secs),
            frontend_url: non_empty_var("FRONTEND_URL"),
            product_service_url: non_empty_var("PRODUCT_SERVICE_URL"),
        })
    }

    /// Origins allowed to call the API from a browser.
    pub fn allowed_origins(&self) -> Vec<String> {
        [
            self.frontend_url.as_deref(),
            Some(self.account_service_url.as_str()),
            self.product_service_url.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
