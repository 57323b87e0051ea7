use std::{
    env,
    fmt::{Debug, Display},
    net::SocketAddr,
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SNAPSHOT_DIR: &str = "./data/snapshots";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub snapshot_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "JUDGING_HOST", DEFAULT_HOST.to_string()),
            port: try_load(&lookup, "JUDGING_PORT", DEFAULT_PORT),
            snapshot_dir: try_load(
                &lookup,
                "JUDGING_SNAPSHOT_DIR",
                PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            ),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
        default
    })
}
