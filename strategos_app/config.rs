use dotenvy::dotenv;
use std::{env, str::FromStr};

use strategos_game::constants::EngineConfig;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_HISTORY_LIMIT: u32 = 10;
const MAX_HISTORY_LIMIT: u32 = 100;
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "strategos.log";
const DEFAULT_LOG_FILTER: &str = "info,strategos=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub history_default_limit: u32,
    pub history_max_limit: u32,
    /// When unset, battle history lives in memory.
    pub database_url: Option<String>,
    pub engine: EngineConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory for the daily rotating log file. `None` logs to stdout only.
    pub dir: Option<String>,
    pub file_prefix: String,
    /// Used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Missing or unparseable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let float_or = |key: &str, default: f64| parse_or_default(&lookup, key, default);

        let port = parse_or_default(&lookup, "STRATEGOS_PORT", DEFAULT_PORT);

        let allowed_origins = lookup("STRATEGOS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let history_max_limit =
            parse_or_default(&lookup, "STRATEGOS_HISTORY_MAX_LIMIT", MAX_HISTORY_LIMIT).max(1);
        let history_default_limit =
            parse_or_default(&lookup, "STRATEGOS_HISTORY_DEFAULT_LIMIT", DEFAULT_HISTORY_LIMIT)
                .clamp(1, history_max_limit);

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let defaults = EngineConfig::default();
        let engine = EngineConfig {
            advantage_factor: float_or("STRATEGOS_ADVANTAGE_FACTOR", defaults.advantage_factor),
            counter_share: float_or("STRATEGOS_COUNTER_SHARE", defaults.counter_share),
            reserve_share: float_or("STRATEGOS_RESERVE_SHARE", defaults.reserve_share),
            bonus_floor: float_or("STRATEGOS_BONUS_FLOOR", defaults.bonus_floor),
            search_iterations: parse_or_default(
                &lookup,
                "STRATEGOS_SEARCH_ITERATIONS",
                defaults.search_iterations,
            ),
            ..defaults
        }
        .sanitized();

        let logging = LogConfig {
            dir: match lookup("STRATEGOS_LOG_DIR") {
                Some(dir) if dir.trim().is_empty() => None,
                Some(dir) => Some(dir.trim().to_string()),
                None => Some(DEFAULT_LOG_DIR.to_string()),
            },
            file_prefix: non_blank_or(&lookup, "STRATEGOS_LOG_FILE", DEFAULT_LOG_FILE_PREFIX),
            default_filter: non_blank_or(&lookup, "STRATEGOS_LOG_FILTER", DEFAULT_LOG_FILTER),
        };

        Self {
            port,
            allowed_origins,
            history_default_limit,
            history_max_limit,
            database_url,
            engine,
            logging,
        }
    }
}

fn non_blank_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or_default<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
