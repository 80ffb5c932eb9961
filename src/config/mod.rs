use crate::core::token::DEFAULT_TOKEN_BYTES;
use crate::db::store::StoreConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod uri;

/// Environment variable that overrides the configured connection URI.
pub const ENV_DB_URI: &str = "TOKENSTORE_DB_URI";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection_uri: String,
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
}

fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection_uri: uri::sqlite_uri_for(&Self::database_file()),
            token_bytes: default_token_bytes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tokenstore")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tokenstore")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tokenstore.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tokenstore.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `$TOKENSTORE_DB_URI`, then the command-line URI.
    pub fn apply_overrides(&mut self, cli_uri: Option<&str>) {
        let env_uri = env::var(ENV_DB_URI).ok();
        self.apply_overrides_from(env_uri.as_deref(), cli_uri);
    }

    /// Later sources win: `env_uri` replaces the file value, `cli_uri` replaces both.
    /// A blank `env_uri` is ignored.
    pub fn apply_overrides_from(&mut self, env_uri: Option<&str>, cli_uri: Option<&str>) {
        if let Some(env_uri) = env_uri
            && !env_uri.trim().is_empty()
        {
            self.connection_uri = env_uri.to_string();
        }

        if let Some(custom) = cli_uri {
            self.connection_uri = custom.to_string();
        }
    }

    /// Explicit configuration handed to the token store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            connection_uri: self.connection_uri.clone(),
        }
    }

    /// Persist this configuration to the config file (skipped in test mode).
    ///
    /// Callers pass the file/default values plus `--db` only; the
    /// environment override is per-process and never written back.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        println!("✅ Config file: {:?}", Self::config_file());
        Ok(())
    }
}
