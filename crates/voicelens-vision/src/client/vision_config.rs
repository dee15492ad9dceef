//! Read API client configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default timeout for a single HTTP request: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Read API client.
///
/// The `MULTI_SERVICE_*` environment names are shared with the synthesis
/// client: one Cognitive Services resource backs both recognition and
/// synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct VisionConfig {
    /// Base endpoint of the Cognitive Services resource.
    #[cfg_attr(
        feature = "config",
        arg(long = "vision-endpoint", env = "MULTI_SERVICE_ENDPOINT")
    )]
    pub endpoint: Url,

    /// Subscription key for the Cognitive Services resource.
    #[cfg_attr(
        feature = "config",
        arg(long = "vision-key", env = "MULTI_SERVICE_KEY", hide_env_values = true)
    )]
    pub api_key: String,

    /// HTTP request timeout in seconds for submit and status calls.
    #[cfg_attr(
        feature = "config",
        arg(long = "vision-timeout", env = "VISION_TIMEOUT", default_value = "30")
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,

    /// User-Agent header to send with requests.
    #[cfg_attr(
        feature = "config",
        arg(long = "vision-user-agent", env = "VISION_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Polling behavior for the asynchronous read operation.
    #[cfg_attr(feature = "config", clap(flatten))]
    #[serde(default)]
    pub poll: PollConfig,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl VisionConfig {
    /// Creates a configuration for the given endpoint and key.
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_key: api_key.into(),
            http_timeout: default_timeout_secs(),
            user_agent: None,
            poll: PollConfig::default(),
        }
    }

    /// Returns the effective timeout, using the default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }

    /// Returns the effective user agent, using the default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("voicelens-vision/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Set the poll configuration.
    #[must_use]
    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }
}

/// Polling behavior for the asynchronous read operation.
///
/// The interval starts at `initial_interval_ms`, doubles on every query
/// and is capped at `max_interval_ms`. Once `max_wait_secs` of total wait
/// would be exceeded the operation is abandoned with a timeout error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct PollConfig {
    /// First delay between status queries, in milliseconds.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "vision-poll-initial-ms",
            env = "VISION_POLL_INITIAL_MS",
            default_value = "500"
        )
    )]
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Upper bound for the delay between status queries, in milliseconds.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "vision-poll-max-ms",
            env = "VISION_POLL_MAX_MS",
            default_value = "4000"
        )
    )]
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,

    /// Total wait budget for one read operation, in seconds.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "vision-poll-max-wait",
            env = "VISION_POLL_MAX_WAIT",
            default_value = "60"
        )
    )]
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
}

fn default_initial_interval_ms() -> u64 {
    500
}

fn default_max_interval_ms() -> u64 {
    4_000
}

fn default_max_wait_secs() -> u64 {
    60
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: default_initial_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
            max_wait_secs: default_max_wait_secs(),
        }
    }
}

impl PollConfig {
    /// First delay between status queries.
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms.max(1))
    }

    /// Upper bound for the delay between status queries.
    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms.max(self.initial_interval_ms.max(1)))
    }

    /// Total wait budget for one read operation.
    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}
