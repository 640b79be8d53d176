// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::path::{Path, PathBuf};

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Listening port
    pub port: u16,
    /// Directory holding the flat-file user store
    pub data_dir: PathBuf,
    /// Secret used to sign the session cookie; ephemeral key when unset
    pub session_secret: Option<String>,
    /// Session TTL in seconds
    pub session_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 5000,
            data_dir: PathBuf::from("data"),
            session_secret: None,
            session_ttl_secs: 60 * 60 * 24 * 7, // 7 days
        }
    }
}

impl Settings {
    /// Load settings from the default config file and environment.
    pub fn load() -> Result<Self> {
        Self::load_from("accounts.toml")
    }

    /// Load settings from a specific config file, then the environment.
    ///
    /// Precedence: defaults < config file < `ACCOUNTS_`-prefixed
    /// environment variables (`ACCOUNTS_PORT`, `ACCOUNTS_DATA_DIR`,
    /// `ACCOUNTS_SESSION_SECRET`, `ACCOUNTS_SESSION_TTL_SECS`).
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ACCOUNTS_"))
            .extract()?;

        Ok(settings)
    }
}
