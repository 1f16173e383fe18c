//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::PlannerConfig;

/// Default listen address.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} not set")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Timetable file (`FESTIVAL_TIMETABLE`, required).
    pub timetable_path: PathBuf,

    /// Line-up file (`FESTIVAL_LINEUP`, optional).
    pub lineup_path: Option<PathBuf>,

    /// Listen address (`FESTIVAL_ADDR`).
    pub addr: SocketAddr,

    /// Planner settings (`FESTIVAL_MEMOIZE`).
    pub planner: PlannerConfig,

    /// Cache settings (`FESTIVAL_CACHE_CAPACITY`, `FESTIVAL_CACHE_IDLE_SECS`).
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Create a configuration with defaults for everything but the timetable.
    pub fn new(timetable_path: impl Into<PathBuf>) -> Self {
        Self {
            timetable_path: timetable_path.into(),
            lineup_path: None,
            addr: SocketAddr::from(DEFAULT_ADDR),
            planner: PlannerConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timetable = lookup("FESTIVAL_TIMETABLE")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("FESTIVAL_TIMETABLE"))?;
        let mut config = Self::new(timetable);

        config.lineup_path = lookup("FESTIVAL_LINEUP")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(addr) =
            parse_var(&lookup, "FESTIVAL_ADDR", |v| v.parse::<SocketAddr>().ok())?
        {
            config.addr = addr;
        }
        if let Some(memoize) = parse_var(&lookup, "FESTIVAL_MEMOIZE", parse_bool)? {
            config.planner.memoize = memoize;
        }
        if let Some(capacity) =
            parse_var(&lookup, "FESTIVAL_CACHE_CAPACITY", |v| v.parse::<u64>().ok())?
        {
            config.cache.max_capacity = capacity;
        }
        if let Some(secs) =
            parse_var(&lookup, "FESTIVAL_CACHE_IDLE_SECS", |v| v.parse::<u64>().ok())?
        {
            config.cache.time_to_idle = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Look up and parse an optional variable. Unset and empty mean "use the default".
fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => parse(value.trim())
            .map(Some)
            .ok_or(ConfigError::Invalid { name, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
