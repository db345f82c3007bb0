use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("llms-mirror/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for llms-mirror
///
/// Every field has a default, so the tool runs without any configuration
/// file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output location configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Documentation root directory under which all mirrored content lives
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl FetchConfig {
    /// Overall request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("./docs")
}
