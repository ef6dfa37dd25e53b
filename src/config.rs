use std::{env, net::SocketAddr, path::PathBuf};

use chrono::Duration;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://rollcall.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_MINUTES: i64 = 30;
const DEFAULT_INDEX_FILE: &str = "static/index.html";

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub index_file: PathBuf,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Config("JWT_SECRET is not set".to_string()))?;

        let minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "ACCESS_TOKEN_EXPIRE_MINUTES must be a positive integer, got {:?}",
                        raw
                    ))
                })?,
            None => DEFAULT_TOKEN_MINUTES,
        };

        let token_ttl = Duration::try_minutes(minutes).ok_or_else(|| {
            AppError::Config(format!("ACCESS_TOKEN_EXPIRE_MINUTES is too large: {}", minutes))
        })?;

        let index_file = PathBuf::from(
            lookup("INDEX_FILE").unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string()),
        );

        Ok(Self {
            database_url,
            bind_addr,
            index_file,
            auth: AuthConfig {
                jwt_secret,
                token_ttl,
            },
        })
    }
}
