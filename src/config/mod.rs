//! Runtime settings
//!
//! Defaults match the public GitHub raw-content endpoint. Each field can be
//! overridden from the environment with an `AGMD_` prefix, e.g.
//! `AGMD_RAW_BASE_URL` or `AGMD_TIMEOUT_SECS`.

use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_USER_AGENT: &str = concat!("agmd/", env!("CARGO_PKG_VERSION"));

const ENV_PREFIX: &str = "AGMD_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base of raw-content URLs; `<owner>/<repo>/refs/heads/main/...` is appended.
    pub raw_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every fetch
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Defaults layered under `AGMD_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::figment().extract().context("Invalid AGMD_* environment configuration")
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}
