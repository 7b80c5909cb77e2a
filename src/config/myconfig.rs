use anyhow::{Context, Result};
use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub dev_mode: bool,
    pub log_dir: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        dotenv().ok();

        let dev_mode = std::env::var("DEV_MODE")
            .map(|val| val == "true" || val == "1")
            .unwrap_or(false);

        let log_dir = match std::env::var("LOG_DIR") {
            Ok(dir) => dir,
            Err(_) if dev_mode => "./logs".to_string(),
            Err(_) => "/var/log/app".to_string(),
        };

        if log_dir.is_empty() {
            return Err(anyhow::anyhow!("LOG_DIR must not be empty")).context("invalid config");
        }

        Ok(Self { dev_mode, log_dir })
    }
}
