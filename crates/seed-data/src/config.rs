//! Configuration types for the seed and maintenance tools.

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

/// Environment variables consulted for database connectivity.
pub const DB_ENV_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_USER", "DB_PASSWORD", "DB_NAME"];

/// Database connection settings, resolved from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        // Placeholders match the local dev database.
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "edufund_user".to_string(),
            password: "132456".to_string(),
            database: "edufund".to_string(),
        }
    }
}

impl DbConfig {
    /// Resolves connection settings from `DB_*` environment variables,
    /// falling back to the local dev placeholders for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            user: std::env::var("DB_USER").unwrap_or(defaults.user),
            password: std::env::var("DB_PASSWORD").unwrap_or(defaults.password),
            database: std::env::var("DB_NAME").unwrap_or(defaults.database),
        }
    }

    /// Connection options for the sqlx MySQL driver.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Reports each `DB_*` variable as set in the current environment.
///
/// Used by the env diagnostic; absent variables yield `None` rather than
/// an error so the report itself can never fail.
pub fn env_report() -> Vec<(&'static str, Option<String>)> {
    DB_ENV_VARS
        .iter()
        .map(|&name| (name, std::env::var(name).ok()))
        .collect()
}

/// Configuration for fixture generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Upper bound on campaigns per user (inclusive); the actual number
    /// is drawn uniformly from `0..=max_campaigns_per_user`.
    pub max_campaigns_per_user: usize,

    /// Probability that a user gets an avatar image.
    pub avatar_probability: f64,

    /// Probability that a campaign is flagged as featured.
    pub featured_probability: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 20,
            max_campaigns_per_user: 3,
            avatar_probability: 0.5,
            featured_probability: 0.2,
        }
    }
}
