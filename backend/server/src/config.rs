use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::ServerError;

pub const DEFAULT_SCHOOL_DOMAIN: &str = "mergington.edu";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub school_domain: String,
    pub enforce_capacity: bool,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        Ok(Self {
            host: try_load("RUST_HOST", "0.0.0.0")?,
            port: try_load("RUST_PORT", "8000")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            school_domain: try_load("SCHOOL_DOMAIN", DEFAULT_SCHOOL_DOMAIN)?,
            enforce_capacity: try_load("ENFORCE_CAPACITY", "false")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            school_domain: DEFAULT_SCHOOL_DOMAIN.to_string(),
            enforce_capacity: false,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ServerError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ServerError::Config {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
}
