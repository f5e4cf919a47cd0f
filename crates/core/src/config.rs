use crate::error::{BpcError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the correlation service does when an event violates the recipe bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Stop consuming events and hand the violation to the host.
    #[default]
    Halt,
    /// Log the violation, drop the offending event and keep consuming.
    LogAndContinue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    pub to_stderr: bool,
    /// Defaults to `~/.bpcorr/logs`.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_stderr: false,
            directory: None,
        }
    }
}

impl LogConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".bpcorr/logs")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    pub intake_capacity: usize,
    pub violation_policy: ViolationPolicy,
    pub log: LogConfig,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            intake_capacity: 256,
            violation_policy: ViolationPolicy::default(),
            log: LogConfig::default(),
        }
    }
}

impl CorrelationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.intake_capacity == 0 {
            return Err(BpcError::Config(
                "intake_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bpcorr.json");
        std::fs::write(&path, r#"{ "violation_policy": "log_and_continue" }"#).unwrap();

        let config = CorrelationConfig::load(&path).unwrap();
        assert_eq!(config.violation_policy, ViolationPolicy::LogAndContinue);
        assert_eq!(config.intake_capacity, 256);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bpcorr.json");
        std::fs::write(&path, r#"{ "intake_capacity": 0 }"#).unwrap();

        let err = CorrelationConfig::load(&path).unwrap_err();
        assert!(matches!(err, BpcError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = CorrelationConfig::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BpcError::Io(_)));
    }

    #[test]
    fn test_explicit_log_dir() {
        let log = LogConfig {
            directory: Some(PathBuf::from("/tmp/bpcorr-logs")),
            ..LogConfig::default()
        };
        assert_eq!(log.log_dir(), PathBuf::from("/tmp/bpcorr-logs"));
    }
}
