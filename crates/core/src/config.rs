//! Process configuration from the environment.
//!
//! Two values are required: the workspace API token and the id of the
//! watchlist database. A local `.env` file is loaded first when present;
//! its absence is not an error.

use crate::error::ConfigError;

/// Environment variable holding the workspace API token.
pub const ENV_API_TOKEN: &str = "NOTION_API_SECRET";
/// Environment variable holding the target database id.
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub database_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Ok(Self {
            api_token: require(ENV_API_TOKEN)?,
            database_id: require(ENV_DATABASE_ID)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar { name }),
    }
}
