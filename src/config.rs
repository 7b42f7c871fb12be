// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_LEVELS: [&str; 6] = ["error", "warn", "info", "debug", "trace", "off"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Defaults for a scan; command line flags override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub file: Option<PathBuf>,
    pub offset: usize,
    pub length: Option<usize>,
    pub unknown_char: char,
    pub strict: bool,
    pub json_output: bool,
    pub log_level: String,
    pub color: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            file: None,
            offset: 0,
            length: None,
            unknown_char: '?',
            strict: false,
            json_output: false,
            log_level: "info".to_string(),
            color: true,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_window(mut self, offset: usize, length: Option<usize>) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.unknown_char, '?');
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScanConfig = serde_json::from_str(r#"{ "offset": 16, "strict": true }"#).unwrap();
        assert_eq!(config.offset, 16);
        assert!(config.strict);
        assert_eq!(config.log_level, "info");
        assert!(config.color);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ScanConfig::new()
            .with_file(PathBuf::from("dump.bin"))
            .with_window(0x100, Some(0x40))
            .with_log_level("DEBUG");
        let text = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&text).unwrap();

        assert_eq!(back, config);
        assert_eq!(back.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_validate_log_level() {
        let err = ScanConfig::new().with_log_level("loud").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(ScanConfig::new().with_log_level("TRACE").validate().is_ok());
    }

    #[test]
    fn test_unicode_unknown_char_is_valid() {
        let config: ScanConfig = serde_json::from_str(r#"{ "unknown_char": "·" }"#).unwrap();
        assert_eq!(config.unknown_char, '·');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("memory_signature_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "length": 32, "json_output": true }"#).unwrap();

        let config = ScanConfig::from_file(&path).unwrap();
        assert_eq!(config.length, Some(32));
        assert!(config.json_output);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(ScanConfig::from_file(&path), Err(ConfigError::Parse(_))));

        fs::remove_file(path).unwrap();
    }
}
