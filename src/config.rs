//! Configuration file loading.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the configuration file searched for in the project tree.
pub const CONFIG_FILENAME: &str = ".deadbranch.toml";

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section.
    pub deadbranch: DeadbranchConfig,
    /// The path of the file this configuration was loaded from.
    /// `None` when defaults are in effect.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for deadbranch.
pub struct DeadbranchConfig {
    /// File extensions to process (without leading dot).
    pub extensions: Option<Vec<String>>,
    /// List of folders to exclude when walking directories.
    pub exclude_folders: Option<Vec<String>>,
    /// Whether to write a `.bak` copy before overwriting files.
    pub backup: Option<bool>,
}

impl Config {
    /// Loads configuration from the current directory upward.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A missing or malformed file silently yields defaults; configuration
    /// is never a hard error.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Self>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
                return Self::default();
            }

            if !current.pop() {
                return Self::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
        assert!(config.deadbranch.extensions.is_none());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[deadbranch]\nextensions = [\"txt\"]\nbackup = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(
            config.deadbranch.extensions,
            Some(vec!["txt".to_owned()])
        );
        assert_eq!(config.deadbranch.backup, Some(true));
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_traverses_upward_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[deadbranch]\nexclude_folders = [\"gen\"]\n",
        )
        .unwrap();
        let sub = dir.path().join("src");
        fs::create_dir(&sub).unwrap();
        let file = sub.join("app.ts");
        fs::write(&file, "x").unwrap();

        let config = Config::load_from_path(&file);
        assert_eq!(
            config.deadbranch.exclude_folders,
            Some(vec!["gen".to_owned()])
        );
    }

    #[test]
    fn test_malformed_config_yields_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not [ valid toml").unwrap();

        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
        assert!(config.deadbranch.backup.is_none());
    }
}
