//! Command line configuration.

use serde::{Deserialize, Serialize};
use std::env::current_exe;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "difficulty-format.json";

/// Returns the default path to the configuration file, next to the
/// executable.
pub fn default_config_path() -> io::Result<PathBuf> {
    let current = current_exe()?;
    let here = current.parent().unwrap_or_else(|| Path::new("."));
    Ok(here.join(CONFIG_FILE_NAME))
}

/// The configuration with all fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct ConfigOpt {
    /// Whether debug logging is enabled.
    debug: Option<bool>,
    /// Whether each formatted value is printed alongside its input.
    show_input: Option<bool>,
}

/// The command line configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Whether debug logging is enabled.
    pub debug: bool,
    /// Whether each formatted value is printed alongside its input.
    pub show_input: bool,
}

impl From<ConfigOpt> for Config {
    fn from(value: ConfigOpt) -> Self {
        Self {
            debug: value.debug.unwrap_or(false),
            show_input: value.show_input.unwrap_or(false),
        }
    }
}

impl From<Config> for ConfigOpt {
    fn from(value: Config) -> Self {
        Self {
            debug: Some(value.debug),
            show_input: Some(value.show_input),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from(ConfigOpt::default())
    }
}

impl Config {
    /// Loads the configuration from the given path, falling back to the
    /// defaults if the file does not exist.
    pub fn load(config_path: &Path) -> io::Result<Self> {
        if config_path.exists() {
            let config_bytes = fs::read(config_path)?;
            let config_opt = serde_json::from_slice::<ConfigOpt>(&config_bytes)?;
            Ok(Self::from(config_opt))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the given path.
    pub fn save(&self, config_path: &Path) -> io::Result<()> {
        let config_opt = ConfigOpt::from(*self);
        let config_bytes = serde_json::to_vec_pretty(&config_opt)?;
        fs::write(config_path, config_bytes)
    }

    /// Applies command line flags on top of the loaded configuration.
    #[must_use]
    pub const fn with_flags(self, debug: bool, show_input: bool) -> Self {
        Self {
            debug: self.debug || debug,
            show_input: self.show_input || show_input,
        }
    }
}
