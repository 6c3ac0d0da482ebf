//! Output configuration, read from `~/.config/genkeys.json`:
//!
//! ```json
//! {
//!     "WriteToFile": true,
//!     "HyprlandPath": "~/.config/hypr/keys.conf",
//!     "SwayPath": "~/.config/sway/keys.conf"
//! }
//! ```
//!
//! Every field is optional. Without a config file, or with `WriteToFile`
//! unset, output goes to standard output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::format::Target;
use crate::output::Destination;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/genkeys.json";

/// Default location of the keybinding definitions.
pub const DEFAULT_KEYDEFS_PATH: &str = "~/.config/genkeys.gnks";

/// Errors that can occur while loading or applying the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The config file is not valid JSON for `Config`.
    #[error("could not parse config `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// `WriteToFile` is set but the path for a selected format is blank.
    #[error("`{key}` not defined in config")]
    MissingPath { key: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// Write each format to its configured path instead of stdout.
    pub write_to_file: bool,
    pub hyprland_path: String,
    pub sway_path: String,
}

impl Config {
    /// Load the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Where output for `target` should go.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPath` when writing to files is enabled
    /// but no path is set for `target`.
    pub fn destination(&self, target: Target) -> Result<Destination, ConfigError> {
        if !self.write_to_file {
            return Ok(Destination::Stdout);
        }

        let (key, path) = match target {
            Target::Sway => ("SwayPath", &self.sway_path),
            Target::Hyprland => ("HyprlandPath", &self.hyprland_path),
        };

        let path = path.trim();
        if path.is_empty() {
            return Err(ConfigError::MissingPath { key });
        }
        Ok(Destination::File(expand_path(path)))
    }
}

/// Expand a leading `~` to the home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
