use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// | Env Var                    | Default        |
/// |----------------------------|----------------|
/// | `EVENTHUB_BIND_ADDR`       | `0.0.0.0:8080` |
/// | `EVENTHUB_SETTLE_DELAY_MS` | `1500`         |
/// | `EVENTHUB_SEED_CATALOG`    | `true`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    /// How long a form submission stays pending before it settles.
    pub settle_delay: Duration,
    /// Load the demo catalog at startup.
    pub seed_catalog: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            settle_delay: Duration::from_millis(1500),
            seed_catalog: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = parse(&lookup, "EVENTHUB_BIND_ADDR", "a socket address")?
            .unwrap_or(defaults.bind_addr);
        let settle_delay = parse::<u64>(&lookup, "EVENTHUB_SETTLE_DELAY_MS", "a number of milliseconds")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.settle_delay);
        let seed_catalog = parse(&lookup, "EVENTHUB_SEED_CATALOG", "true or false")?
            .unwrap_or(defaults.seed_catalog);

        Ok(Self {
            bind_addr,
            settle_delay,
            seed_catalog,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ConfigError::Invalid {
        key,
        expected,
        value: raw.clone(),
    })
}
