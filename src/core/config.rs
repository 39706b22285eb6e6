//! Salt binary names.
//!
//! Defaults to `salt-call` and `salt` on the search path. The
//! `STATE_SALT_CALL` / `STATE_SALT` environment variables rename either one.

pub const SALT_CALL_ENV: &str = "STATE_SALT_CALL";
pub const SALT_ENV: &str = "STATE_SALT";

/// Names of the external salt binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Local single-node agent
    pub salt_call: String,

    /// Cluster-wide agent, run against the master
    pub salt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            salt_call: "salt-call".to_string(),
            salt: "salt".to_string(),
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Config {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Apply overrides found through `lookup`. Empty values are ignored.
    pub fn load<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(name) = lookup(SALT_CALL_ENV).filter(|v| !v.is_empty()) {
            config.salt_call = name;
        }
        if let Some(name) = lookup(SALT_ENV).filter(|v| !v.is_empty()) {
            config.salt = name;
        }
        config
    }
}
