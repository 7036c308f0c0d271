//! Startup configuration
//!
//! Flags fall back to environment variables, and `main` loads `.env` before
//! parsing. The bot token is only ever read from the environment and is
//! wrapped in `Sensitive` straight away.

use buildboard_core::logging_facility::Profile;
use buildboard_core_types::Sensitive;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the bot token
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

#[derive(Debug, Parser)]
#[command(name = "buildboard")]
#[command(about = "buildboard - share hero build codes through Discord slash commands", long_about = None)]
pub struct Cli {
    /// SQLite database file, created on first run
    #[arg(long, env = "BUILDBOARD_DB_PATH", default_value = "builds.db")]
    pub db_path: PathBuf,

    /// Log output: development (human-readable) or production (JSON)
    #[arg(long, env = "BUILDBOARD_LOG_PROFILE", default_value = "development")]
    pub log_profile: Profile,
}

/// Fatal configuration problems
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingToken(&'static str),

    #[error("{0} is set but empty")]
    EmptyToken(&'static str),
}

/// Resolved bot configuration
#[derive(Debug)]
pub struct BotConfig {
    pub token: Sensitive<String>,
    pub db_path: PathBuf,
    pub log_profile: Profile,
}

impl BotConfig {
    /// Combine parsed flags with the token from the process environment
    ///
    /// # Errors
    /// Returns `ConfigError` when `DISCORD_TOKEN` is missing or blank.
    pub fn from_env(cli: Cli) -> Result<Self, ConfigError> {
        Self::new(cli, std::env::var(TOKEN_ENV).ok())
    }

    /// Combine parsed flags with an already-read token
    ///
    /// # Errors
    /// Returns `ConfigError` when the token is missing or blank.
    pub fn new(cli: Cli, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.ok_or(ConfigError::MissingToken(TOKEN_ENV))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken(TOKEN_ENV));
        }

        Ok(Self {
            token: Sensitive::new(token),
            db_path: cli.db_path,
            log_profile: cli.log_profile,
        })
    }
}
