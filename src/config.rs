use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Optional config file read from the working directory.
pub const CONFIG_FILE: &str = "keysafe.toml";

/// Prefix for environment overrides, e.g. `KEYSAFE_LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "KEYSAFE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:keysafe.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    /// Defaults, then `keysafe.toml`, then `KEYSAFE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
