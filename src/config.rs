// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_write_attempts: u32,
    seed_on_start: bool,
    seed_admin_email: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://jotter.db?mode=rwc".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_SLUG_WRITE_ATTEMPTS: u32 = 3;
const DEFAULT_SEED_ADMIN_EMAIL: &str = "admin@localhost";

impl AppConfig {
    /// Build configuration from the process environment, reading `.env`
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_database_url);

        let database_max_connections = positive(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let slug_write_attempts =
            positive(&lookup, "SLUG_WRITE_ATTEMPTS", DEFAULT_SLUG_WRITE_ATTEMPTS)?;

        let seed_on_start = lookup("SEED_ON_START")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let seed_admin_email = lookup("SEED_ADMIN_EMAIL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SEED_ADMIN_EMAIL.to_owned());
        if !seed_admin_email.contains('@') {
            return Err(ConfigError::Invalid(
                "SEED_ADMIN_EMAIL must be an email address".into(),
            ));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            slug_write_attempts,
            seed_on_start,
            seed_admin_email,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// How many times a write that lost a slug race is retried.
    pub fn slug_write_attempts(&self) -> u32 {
        self.slug_write_attempts
    }

    pub fn seed_on_start(&self) -> bool {
        self.seed_on_start
    }

    pub fn seed_admin_email(&self) -> &str {
        &self.seed_admin_email
    }
}

fn positive<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value >= 1 => Ok(value),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got `{raw}`"
            ))),
        },
    }
}
