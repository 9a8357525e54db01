//! Centralized configuration (environment variables + defaults).
//!
//! Callers are expected to have run `dotenv::dotenv()` first so `.env` values apply.

use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite:database.sqlite?mode=rwc";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection URL. Defaults to `database.sqlite` in the working directory,
/// created on first start.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Pool size for the store.
pub fn database_max_connections() -> u32 {
    parse_or_default(env_lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)
}

pub fn port() -> u16 {
    parse_or_default(env_lookup, "PORT", DEFAULT_PORT)
}

pub fn bind_host() -> String {
    std::env::var("BIND_HOST").unwrap_or_else(|_| DEFAULT_BIND_HOST.to_string())
}

/// Address the API server listens on.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = format!("{}:{}", bind_host(), port());
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid listen address {raw}: {e}"))
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_or_default<T, F>(lookup: F, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(%key, value = %raw, %default, "ignoring unparsable setting");
                default
            }
        },
        None => default,
    }
}
