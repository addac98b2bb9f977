//! Configuration management.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the instinct store inside the data directory.
pub const INSTINCTS_FILE: &str = "instincts.json";

/// File name of the append-only observation log inside the data directory.
///
/// The log is written by an external observer process; no command here reads
/// or rewrites it.
pub const OBSERVATIONS_FILE: &str = "observations.jsonl";

/// Main configuration for instinct.
#[derive(Debug, Clone)]
pub struct InstinctConfig {
    /// Path to the data directory holding the store and observation log.
    pub data_dir: PathBuf,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
}

impl Default for InstinctConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".instinct"),
        }
    }
}

impl InstinctConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following sources in order:
    /// 1. `INSTINCT_DATA_DIR` environment variable (test isolation)
    /// 2. Platform-specific config dir (`~/Library/Application Support/instinct/` on macOS)
    /// 3. XDG config dir (`~/.config/instinct/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        if let Ok(data_dir) = std::env::var("INSTINCT_DATA_DIR") {
            if !data_dir.trim().is_empty() {
                return Self::default().with_data_dir(data_dir);
            }
        }

        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        // Check platform-specific config dir first
        let platform_config = base_dirs.config_dir().join("instinct").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        // Fall back to XDG-style ~/.config/instinct/ for Unix compatibility
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("instinct")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `InstinctConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = file.data_dir {
            config.data_dir = PathBuf::from(data_dir);
        }

        config
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Returns the path of the instinct store file.
    #[must_use]
    pub fn instincts_path(&self) -> PathBuf {
        self.data_dir.join(INSTINCTS_FILE)
    }

    /// Returns the path of the observation log file.
    #[must_use]
    pub fn observations_path(&self) -> PathBuf {
        self.data_dir.join(OBSERVATIONS_FILE)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_paths() {
        let config = InstinctConfig::default();
        assert_eq!(config.instincts_path(), Path::new(".instinct/instincts.json"));
        assert_eq!(
            config.observations_path(),
            Path::new(".instinct/observations.jsonl")
        );
    }

    #[test]
    fn test_with_data_dir() {
        let config = InstinctConfig::new().with_data_dir("/tmp/instinct-test");
        assert_eq!(
            config.instincts_path(),
            Path::new("/tmp/instinct-test/instincts.json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(f, "data_dir = \"/var/lib/instinct\"").unwrap();

        let config = InstinctConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.data_dir, Path::new("/var/lib/instinct"));
    }

    #[test]
    fn test_load_from_file_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let config = InstinctConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.data_dir, Path::new(".instinct"));
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = InstinctConfig::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "data_dir = [not toml").unwrap();

        let result = InstinctConfig::load_from_file(&config_path);
        assert!(result.is_err());
    }
}
