//! Fetcher configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Showcase host.
pub const BIOBANK_DOMAIN: &str = "https://biobank.ndph.ox.ac.uk";

/// Directory schema files are written to by default.
pub const DEFAULT_OUT_DIR: &str = "schemas";

const USER_AGENT_VALUE: &str = concat!("ukb-schema-tools/", env!("CARGO_PKG_VERSION"));

/// Where to fetch from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Scheme and host the Showcase is served from.
    pub base_url: String,
    /// Directory the schema files are written to.
    pub out_dir: PathBuf,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: BIOBANK_DOMAIN.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout: None,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Page listing every schema.
    pub fn index_url(&self) -> String {
        format!("{}/showcase/download.cgi", self.base_url)
    }

    /// Tab-separated export of one schema.
    pub fn download_url(&self, schema_id: u32) -> String {
        format!("{}/ukb/scdown.cgi?fmt=txt&id={schema_id}", self.base_url)
    }
}
