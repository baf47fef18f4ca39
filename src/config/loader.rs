use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DocqError;

use super::types::Config;

/// Default config location: `<platform config dir>/docq/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docq").join("config.toml"))
}

/// Load configuration from an explicit path, or from the default location.
///
/// A missing file is not an error: docq must come up with defaults on a
/// machine that has never been configured. A file that exists but fails to
/// parse is surfaced, since silently ignoring a typo would be worse than
/// refusing to start.
pub fn load(path: Option<&Path>) -> Result<Config, DocqError> {
    let path = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => match default_config_path() {
            Some(default) => default,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|err| DocqError::InvalidConfig(err.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
