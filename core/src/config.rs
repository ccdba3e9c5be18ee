//! Transport configuration.
//!
//! Nothing here is part of the pipeline contract: the defaults leave every
//! knob at the transport's own default. Callers that want a deadline or a
//! different user agent set it here or through the environment.

use std::time::Duration;

use log::warn;

pub const DEFAULT_USER_AGENT: &str = concat!("fetch-core/", env!("CARGO_PKG_VERSION"));

pub const USER_AGENT_ENV: &str = "FETCH_CORE_USER_AGENT";
pub const TIMEOUT_ENV: &str = "FETCH_CORE_TIMEOUT_SECS";

/// Settings for `ReqwestTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub user_agent: String,
    /// Whole-request deadline. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Honor `HTTP_PROXY` and friends.
    pub use_system_proxy: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            use_system_proxy: true,
        }
    }
}

impl TransportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unparseable values
    /// are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(0) => warn!("{TIMEOUT_ENV}=0 ignored"),
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(e) => warn!("{TIMEOUT_ENV}={raw:?} ignored: {e}"),
            }
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}
