use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub log_format: LogFormat,
    /// Apply pending schema migrations before serving.
    pub run_migrations: bool,
}

impl Config {
    /// Defaults, then an optional `booking.toml`, then the environment
    /// (`DATABASE_URL`, `SERVER_PORT`, ...).
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 3000)?
            .set_default("log_format", "pretty")?
            .set_default("run_migrations", true)?
            .add_source(::config::File::with_name("booking").required(false))
            .add_source(::config::Environment::default().try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("DATABASE_URL must be set and SERVER_PORT must be a valid port number")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
