//! Process configuration read from the environment.

use anyhow::{bail, Result};

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format {other:?}; expected \"text\" or \"json\""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = lookup("ARM_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_format = match lookup("ARM_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "ARM_LOG_LEVEL" => Some("debug".to_string()),
            "ARM_LOG_FORMAT" => Some("JSON".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Config::from_lookup(|key| (key == "ARM_LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown log format"));
    }
}
