use log::warn;
use std::env;

use crate::transaction::DEFAULT_BLOCK_SLOTS;

/// Runtime settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub block_slots: usize,
    pub default_payload: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            block_slots: DEFAULT_BLOCK_SLOTS,
            default_payload: None,
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}");
            fallback
        }),
        Err(_) => fallback,
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT", defaults.port),
            block_slots: parsed("BLOCK_SLOTS", defaults.block_slots).max(1),
            default_payload: env::var("DEFAULT_PAYLOAD")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        }
    }
}
