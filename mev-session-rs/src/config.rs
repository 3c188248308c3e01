use ethereum_consensus::primitives::Version;
use serde::Deserialize;
use std::{fmt, net::Ipv4Addr, path::Path, time::Duration};

pub const DEFAULT_GAS_CEIL: u64 = 1_000_000_000_000_000_000;
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_CONCURRENT_SESSIONS: usize = 16;

fn default_genesis_fork_version() -> Version {
    Version::try_from([0x00, 0x00, 0x10, 0x20].as_ref()).expect("correct length")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// Hard cap on the gas limit of any block built in a session.
    pub gas_ceil: u64,
    /// How long a session may sit unused before it is evicted.
    #[serde(with = "humantime_serde")]
    pub session_idle_timeout: Duration,
    /// Bound on the number of sessions alive at once; `new_session` waits
    /// for a free slot past this point.
    pub max_concurrent_sessions: usize,
    /// Beacon node used for the payload attributes event stream.
    pub beacon_rpc_url: Option<String>,
    /// Relay queried for per-slot validator registrations.
    pub relay_url: Option<String>,
    /// Fork version folded into the builder signing domain.
    #[serde(default = "default_genesis_fork_version")]
    pub genesis_fork_version: Version,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED,
            port: 8555,
            gas_ceil: DEFAULT_GAS_CEIL,
            session_idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
            max_concurrent_sessions: DEFAULT_MAX_CONCURRENT_SESSIONS,
            beacon_rpc_url: None,
            relay_url: None,
            genesis_fork_version: default_genesis_fork_version(),
        }
    }
}

impl Config {
    pub fn from_toml_file<P: AsRef<Path> + fmt::Display>(path: P) -> eyre::Result<Self> {
        tracing::info!("loading config from `{path}`...");
        let config_data = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&config_data)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults_from_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.gas_ceil, DEFAULT_GAS_CEIL);
        assert_eq!(config.session_idle_timeout, DEFAULT_SESSION_IDLE_TIMEOUT);
        assert_eq!(config.max_concurrent_sessions, DEFAULT_MAX_CONCURRENT_SESSIONS);
        assert_eq!(config.genesis_fork_version, default_genesis_fork_version());
    }

    #[test]
    fn parses_overrides() {
        let config: Config = toml::from_str(
            r#"
            port = 9000
            gas_ceil = 30000000
            session_idle_timeout = "250ms"
            max_concurrent_sessions = 4
            relay_url = "https://relay.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.gas_ceil, 30_000_000);
        assert_eq!(config.session_idle_timeout, Duration::from_millis(250));
        assert_eq!(config.max_concurrent_sessions, 4);
        assert_eq!(config.relay_url.as_deref(), Some("https://relay.example.com"));
    }
}
