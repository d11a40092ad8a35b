//! Runtime configuration.
//!
//! Defaults match a stock Linux system; tests and chroots point the roots
//! elsewhere. A config file is optional and only needs the keys it changes:
//!
//! ```toml
//! sysfs_root = "/sys"
//! procfs_root = "/proc"
//! buffer_size = 24576
//! backends = ["sysfs"]
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::api::models::WlinfoError;
use crate::types::constants::limits;

/// Settings shared by the registry and the built-in backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mount point of sysfs.
    pub sysfs_root: PathBuf,
    /// Mount point of procfs.
    pub procfs_root: PathBuf,
    /// Capacity of list buffers handed to raw backends, in bytes.
    pub buffer_size: usize,
    /// Names of the backends to register. `None` registers all of them.
    /// Registry order is kept regardless of the order listed here.
    pub backends: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from("/sys"),
            procfs_root: PathBuf::from("/proc"),
            buffer_size: limits::BUFSIZE,
            backends: None,
        }
    }
}

impl Config {
    /// Parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
            .map_err(|e| WlinfoError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `wlinfo/config.toml` from the user's config directory, or the
    /// defaults if there is none.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!("loading configuration from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Location searched by [`Config::discover`].
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("wlinfo");
            path.push("config.toml");
            path
        })
    }

    /// Whether the backend called `name` should be registered.
    pub fn backend_enabled(&self, name: &str) -> bool {
        self.backends
            .as_ref()
            .is_none_or(|names| names.iter().any(|n| n == name))
    }
}
