use crate::error::ClientStoreError;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CLIENTSTORE_DATABASE_URL`.
pub const ENV_PREFIX: &str = "CLIENTSTORE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:clientstore.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `CLIENTSTORE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ClientStoreError> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CLIENTSTORE_DATABASE_URL", "sqlite::memory:");
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn defaults_without_env() {
        figment::Jail::expect_with(|_jail| {
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }
}
