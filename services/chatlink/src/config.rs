/// Chatlink service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ChatlinkConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3114). Env var: `CHATLINK_PORT`.
    pub chatlink_port: u16,
    /// Seconds between expiry sweeps (default 300). Env var: `SWEEP_INTERVAL_SECS`.
    pub sweep_interval_secs: u64,
}

impl ChatlinkConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            chatlink_port: std::env::var("CHATLINK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            sweep_interval_secs: std::env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}
