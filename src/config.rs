use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single line's quantity, enforced at the API layer.
    pub max_line_quantity: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let max_line_quantity = env::var("MAX_LINE_QUANTITY")
            .ok()
            .and_then(|q| q.parse::<i64>().ok())
            .unwrap_or(10);
        Ok(Self {
            host,
            port,
            max_line_quantity,
        })
    }
}
