// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Where the property dashboard gets its numbers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    Mock,
    Database,
}

impl FromStr for StatsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(StatsSource::Mock),
            "database" | "db" => Ok(StatsSource::Database),
            other => Err(format!("unknown stats source '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub stats_source: StatsSource,
    /// Adds `Secure` to the session cookie. Off for plain-http local runs.
    pub cookie_secure: bool,
    pub login: LoginConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "hostelpulse.sqlite3".to_string(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            stats_source: StatsSource::Database,
            cookie_secure: false,
            login: LoginConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `HOSTELPULSE_*` variables; anything missing or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            db_path: lookup("HOSTELPULSE_DB").unwrap_or(defaults.db_path),
            addr: parse_or("HOSTELPULSE_ADDR", lookup("HOSTELPULSE_ADDR"), defaults.addr),
            max_workers: parse_or(
                "HOSTELPULSE_WORKERS",
                lookup("HOSTELPULSE_WORKERS"),
                defaults.max_workers,
            ),
            stats_source: parse_or(
                "HOSTELPULSE_STATS",
                lookup("HOSTELPULSE_STATS"),
                defaults.stats_source,
            ),
            cookie_secure: parse_or(
                "HOSTELPULSE_COOKIE_SECURE",
                lookup("HOSTELPULSE_COOKIE_SECURE"),
                defaults.cookie_secure,
            ),
            login: defaults.login,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {key}={value:?}, using default");
            default
        }),
    }
}

#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// TTL for login links in seconds.
    pub link_ttl_secs: i64,
    /// TTL for sessions in seconds.
    pub session_ttl_secs: i64,
    /// Relative path used when building links, e.g. "/auth/magic".
    pub link_path: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            link_ttl_secs: 15 * 60,
            session_ttl_secs: 60 * 60 * 24 * 7,
            link_path: "/auth/magic".to_string(),
        }
    }
}
