//! Settings file loading.
//!
//! Settings only seed the screen's initial values. Lookup order:
//! 1. An explicit `--config` path
//! 2. ./tipcalc.toml (local override)
//! 3. <config_dir>/tipcalc/config.toml (global user config)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{DEFAULT_PERCENT, MAX_PERCENT};

/// Local settings file name
const LOCAL_FILE: &str = "tipcalc.toml";

/// Initial values for the calculator screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slider position on startup
    pub default_percent: u8,
    /// Party size text on startup
    pub default_split: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_percent: DEFAULT_PERCENT,
            default_split: "1".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if settings.default_percent > MAX_PERCENT {
            return Err(ConfigError::PercentOutOfRange(settings.default_percent));
        }

        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolve settings using the lookup order.
    ///
    /// An explicit path must exist; the implicit locations are skipped
    /// when missing.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading settings from --config");
            return Self::load(path);
        }

        match find_settings_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Self::load(&path)
            }
            None => {
                debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Global settings location, if the platform has a config dir
pub fn global_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tipcalc").join("config.toml"))
}

/// First settings file that exists, local before global
fn find_settings_file() -> Option<PathBuf> {
    let local_path = PathBuf::from(LOCAL_FILE);
    if local_path.exists() {
        return Some(local_path);
    }

    global_settings_path().filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.default_percent, 15);
        assert_eq!(settings.default_split, "1");
    }

    #[test]
    fn test_from_toml_full() {
        let settings = Settings::from_toml(
            "default_percent = 20\ndefault_split = \"2\"\n",
            Path::new("test.toml"),
        )
        .unwrap();
        assert_eq!(settings.default_percent, 20);
        assert_eq!(settings.default_split, "2");
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let settings = Settings::from_toml("default_percent = 18\n", Path::new("test.toml")).unwrap();
        assert_eq!(settings.default_percent, 18);
        assert_eq!(settings.default_split, "1");
    }

    #[test]
    fn test_from_toml_empty() {
        let settings = Settings::from_toml("", Path::new("test.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_percent_out_of_range() {
        let err = Settings::from_toml("default_percent = 81\n", Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::PercentOutOfRange(81)));
    }

    #[test]
    fn test_from_toml_bad_type() {
        let err =
            Settings::from_toml("default_percent = \"lots\"\n", Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_percent = 25").unwrap();
        writeln!(file, "default_split = \"3\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.default_percent, 25);
        assert_eq!(settings.default_split, "3");
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Settings::resolve(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
