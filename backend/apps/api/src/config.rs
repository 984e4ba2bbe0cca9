//! Server Configuration
//!
//! Read once from the environment at startup. Invalid values fall back to
//! their defaults with a warning; secret values are never logged.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::bail;
use auth::AuthConfig;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_COOKIE_AGE_HOURS: u64 = 24;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub frontend_origins: Vec<String>,
    pub is_production: bool,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let is_production = is_production();
        let cookie_age_hours = try_load("COOKIE_AGE", DEFAULT_COOKIE_AGE_HOURS);

        let mut auth = match secret("APP_SECRET") {
            Some(secret) => AuthConfig::new(secret.into_bytes()),
            None if cfg!(debug_assertions) => {
                warn!("APP_SECRET not set, using a random secret; sessions end at restart");
                AuthConfig::with_random_secret()
            }
            None => bail!("APP_SECRET must be set in release builds"),
        };
        auth.cookie_max_age = Duration::from_secs(cookie_age_hours.saturating_mul(3600));
        auth.cookie_secure = is_production;
        auth.password_pepper = secret("PASSWORD_PEPPER").map(String::into_bytes);

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT),
            database_url: secret("DATABASE_URL"),
            frontend_origins,
            is_production,
            auth,
        })
    }
}

fn is_production() -> bool {
    let flag = env::var("IS_PROD")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    let app_env = env::var("APP_ENV")
        .map(|v| v.trim().eq_ignore_ascii_case("production"))
        .unwrap_or(false);
    flag || app_env
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value ({e}), using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

/// Non-empty variable whose value must stay out of the logs
fn secret(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
