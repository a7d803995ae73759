//! Configuration management

use crate::domain::tags::{LanguageSet, DEFAULT_LANGUAGE_TAGS};
use crate::error::{Result, Tiddly2MdError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tags written to `programmiersprache` instead of `tags`
    #[serde(default = "default_language_tags")]
    pub language_tags: Vec<String>,
}

fn default_language_tags() -> Vec<String> {
    DEFAULT_LANGUAGE_TAGS.iter().map(|t| t.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language_tags: default_language_tags(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Tiddly2MdError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Tiddly2MdError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the given file, or fall back to built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.language_tags.iter().any(|t| t.is_empty()) {
            return Err(Tiddly2MdError::Config(
                "language_tags entries must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn languages(&self) -> LanguageSet {
        LanguageSet::new(self.language_tags.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.languages(), LanguageSet::default());
    }

    #[test]
    fn test_load_language_tags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiddly2md.toml");
        fs::write(&path, "language_tags = [\"rust\", \"go\"]\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.language_tags, vec!["rust", "go"]);
        assert!(config.languages().contains("rust"));
        assert!(!config.languages().contains("python"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiddly2md.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("absent.toml"));

        match result.unwrap_err() {
            Tiddly2MdError::Config(msg) => assert!(msg.contains("Failed to read config file")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiddly2md.toml");
        fs::write(&path, "languages = [\"c\"]\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(Tiddly2MdError::Config(_))
        ));
    }

    #[test]
    fn test_empty_language_tag_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiddly2md.toml");
        fs::write(&path, "language_tags = [\"c\", \"\"]\n").unwrap();

        match Config::load_from_file(&path).unwrap_err() {
            Tiddly2MdError::Config(msg) => assert!(msg.contains("language_tags")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
