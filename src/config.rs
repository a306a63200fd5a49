use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    // anything other than "json" falls back to human readable output
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub seed_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("Failed to determine DATABASE_URL from environment variables")?;

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()));

        // seeding is opt-in, an empty value counts as unset
        let seed_dir = std::env::var("SEED_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);

        let log_format = LogFormat::parse(&std::env::var("LOG_FORMAT").unwrap_or_default());

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            static_dir,
            seed_dir,
            log_format,
        })
    }
}
