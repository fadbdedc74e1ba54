use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static DEFAULT_API_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://api.prisma.io").expect("valid default API url"));

/// Provider API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the management API.
    /// TOML: `api.url`. Default: `https://api.prisma.io`.
    #[serde(default = "default_api_url")]
    pub url: Url,

    /// Optional HTTP proxy for all provider calls.
    /// TOML: `api.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// TCP connect timeout in seconds.
    /// TOML: `api.connect_timeout_secs`. Default: `10`.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            proxy: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_api_url() -> Url {
    DEFAULT_API_URL.clone()
}

fn default_connect_timeout_secs() -> u64 {
    10
}
