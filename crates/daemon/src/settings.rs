//! Daemon settings, read from `JOBWATCH_*` environment variables

use config::{Config, ConfigError, Environment};
use jobwatch_core::error::{AppError, Result};
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "JOBWATCH";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub external_jobs_url: String,
    pub external_timeout_secs: u64,
    pub log_format: String,
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit variable map (tests)
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let mut settings: Settings = Config::builder()
            .set_default("database_url", "~/.jobwatch/jobs.db")
            .and_then(|b| b.set_default("rpc_host", "127.0.0.1"))
            .and_then(|b| b.set_default("rpc_port", 9630))
            .and_then(|b| b.set_default("external_jobs_url", "http://localhost:8081"))
            .and_then(|b| b.set_default("external_timeout_secs", 10))
            .and_then(|b| b.set_default("log_format", "pretty"))
            .map_err(config_error)?
            .add_source(env.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;

        settings.database_url = shellexpand::tilde(&settings.database_url).into_owned();
        if settings.external_timeout_secs == 0 {
            return Err(AppError::Config(
                "external_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(settings)
    }
}

fn config_error(err: ConfigError) -> AppError {
    AppError::Config(err.to_string())
}
