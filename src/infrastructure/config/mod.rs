use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::race::normalize_column_name;

pub const CONFIG_FILE: &str = "racestats.toml";
pub const ENV_PREFIX: &str = "RACESTATS_";

/// Service settings: defaults, then `racestats.toml`, then `RACESTATS_*`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Directory holding the race-result files
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Single ASCII field separator
    pub delimiter: String,
    pub file_extension: String,
    /// Driver-name column candidates, tried in order per row
    pub driver_columns: Vec<String>,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            host: "127.0.0.1".to_string(),
            port: 5000,
            delimiter: ";".to_string(),
            file_extension: "csv".to_string(),
            driver_columns: vec!["DRIVER_*EXTRA 3".to_string(), "DRIVER".to_string()],
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve settings from the working directory and the environment
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.file_extension.trim_start_matches('.').is_empty() {
            return Err(AppError::Config("file_extension must not be empty".to_string()));
        }
        if self.driver_column_names().is_empty() {
            return Err(AppError::Config(
                "driver_columns must name at least one column".to_string(),
            ));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn extension(&self) -> &str {
        self.file_extension.trim_start_matches('.')
    }

    /// Driver column candidates normalized like table headers
    pub fn driver_column_names(&self) -> Vec<String> {
        self.driver_columns
            .iter()
            .map(|c| normalize_column_name(c))
            .filter(|c| !c.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_toml(toml: &str) -> Result<ServiceConfig> {
        ServiceConfig::from_figment(
            Figment::from(Serialized::defaults(ServiceConfig::default()))
                .merge(Toml::string(toml)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = with_toml("").unwrap();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.port, 5000);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(
            config.driver_column_names(),
            vec!["DRIVER_*EXTRA 3", "DRIVER"]
        );
    }

    #[test]
    fn test_toml_overrides() {
        let config = with_toml(
            r#"
            data_dir = "/srv/races"
            port = 8080
            file_extension = ".CSV"
            driver_columns = [" driver_name "]
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/races"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.extension(), "CSV");
        assert_eq!(config.driver_column_names(), vec!["DRIVER_NAME"]);
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        let err = with_toml(r#"delimiter = ";;""#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_driver_columns() {
        let err = with_toml("driver_columns = []").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
