use std::time::Duration;

use serde::Deserialize;

use crate::Result;

/// Tunables shared by every RPC and polling operation the harness issues.
///
/// All RPCs carry an explicit per-call timeout; callers that do not pick
/// their own use [`HarnessConfig::rpc_timeout`]. Polling loops sleep
/// [`HarnessConfig::retry_interval`] between attempts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub connect_timeout_in_ms: u64,
    pub rpc_timeout_in_ms: u64,
    pub retry_interval_in_ms: u64,
    pub tcp_keepalive_in_secs: u64,
    pub enable_compression: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            connect_timeout_in_ms: 1000,
            rpc_timeout_in_ms: 3000,
            retry_interval_in_ms: 50,
            tcp_keepalive_in_secs: 3600,
            enable_compression: false,
        }
    }
}

impl HarnessConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_in_ms)
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc_timeout_in_ms)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_in_ms)
    }

    pub fn tcp_keepalive(&self) -> Duration {
        Duration::from_secs(self.tcp_keepalive_in_secs)
    }

    /// Load overrides from a TOML file; anything unset keeps its default.
    pub fn from_toml(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parse overrides from an inline TOML fragment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
