mod api;

pub use api::ApiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Action configuration managed by Figment.
///
/// Sources, lowest precedence first: built-in defaults, `ppg.toml` in the working directory,
/// `PPG_*` environment variables (`__` separates nested keys, e.g. `PPG_API__URL`), and the
/// GitHub Actions `INPUT_*` variables, which are taken verbatim rather than parsed.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    /// Provider service token. Required; checked when provisioning starts.
    /// TOML: `service_token`. Env: `INPUT_SERVICE_TOKEN`.
    #[serde(default, deserialize_with = "deserialize_optional_string_lax")]
    pub service_token: Option<String>,

    /// Provider project that owns the database. Required.
    /// TOML: `project_id`. Env: `INPUT_PROJECT_ID`.
    #[serde(default, deserialize_with = "deserialize_optional_string_lax")]
    pub project_id: Option<String>,

    /// Explicit database name; sanitized before use. Overrides the CI-derived name.
    /// TOML: `database_name`. Env: `INPUT_DATABASE_NAME`.
    #[serde(default, deserialize_with = "deserialize_optional_string_lax")]
    pub database_name: Option<String>,

    /// Provider region identifier for newly created databases.
    /// TOML: `region`. Env: `INPUT_REGION`.
    #[serde(default, deserialize_with = "deserialize_optional_string_lax")]
    pub region: Option<String>,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug").
    /// TOML: `loglevel`. Default: `info`. `RUST_LOG` wins when set.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Deadline for the whole provisioning run, in seconds. `0` disables it.
    /// TOML: `timeout_secs`. Default: `300`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Provider API settings (see `api` table).
    #[serde(default)]
    pub api: ApiConfig,
}

const DEFAULT_CONFIG_FILE: &str = "ppg.toml";

/// Action inputs as `(config key, env var, trim)`. The token is kept byte-for-byte.
const ACTION_INPUTS: [(&str, &str, bool); 4] = [
    ("service_token", "INPUT_SERVICE_TOKEN", false),
    ("project_id", "INPUT_PROJECT_ID", true),
    ("database_name", "INPUT_DATABASE_NAME", true),
    ("region", "INPUT_REGION", true),
];

impl Default for Config {
    fn default() -> Self {
        Self {
            service_token: None,
            project_id: None,
            database_name: None,
            region: None,
            loglevel: default_loglevel(),
            timeout_secs: default_timeout_secs(),
            api: ApiConfig::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "service_token",
                &self.service_token.as_ref().map(|_| "<redacted>"),
            )
            .field("project_id", &self.project_id)
            .field("database_name", &self.database_name)
            .field("region", &self.region)
            .field("loglevel", &self.loglevel)
            .field("timeout_secs", &self.timeout_secs)
            .field("api", &self.api)
            .finish()
    }
}

impl Config {
    /// Builds a Figment that merges defaults, the optional config file and the environment.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment = figment.merge(Env::prefixed("PPG_").split("__"));

        for (key, var, trim) in ACTION_INPUTS {
            let Ok(raw) = env::var(var) else { continue };
            let value = if trim { raw.trim().to_string() } else { raw };
            figment = figment.merge(Serialized::default(key, value));
        }
        figment
    }

    /// Extracts the configuration. Required inputs are not validated here.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn deadline(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// Reads a string that the `PPG_*` environment provider may have parsed as a number or boolean.
///
/// Blank strings count as unset: CI runners export every declared input, empty or not.
fn deserialize_optional_string_lax<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;

    let s = match v {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => {
            return Err(serde::de::Error::custom(
                "expected a string, number or boolean",
            ));
        }
    };

    Ok((!s.trim().is_empty()).then_some(s))
}
