//! Settings loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading
//! [`PayrollSettings`] from a YAML file.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollSettings;

/// Loads payroll settings from YAML.
///
/// # File Format
///
/// ```text
/// currency_symbol: "€"
/// report_title: "=== Payroll ==="
/// ```
///
/// Omitted keys keep their defaults.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads settings from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file exists but cannot be read, e.g. permission denied or
    ///   invalid UTF-8 (`ConfigReadError`)
    /// - The file contains invalid YAML or unknown keys (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use employee_payroll::config::ConfigLoader;
    ///
    /// let settings = ConfigLoader::load("./payroll.yaml")?;
    /// # Ok::<(), employee_payroll::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollSettings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PayrollError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => PayrollError::ConfigReadError {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        let settings = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, ?settings, "Loaded payroll settings");
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise returns the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<PayrollSettings> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(PayrollSettings::default()),
        }
    }

    /// Parses settings from YAML text. An empty document yields the defaults.
    fn parse(content: &str) -> Result<PayrollSettings, String> {
        if content.trim().is_empty() {
            return Ok(PayrollSettings::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REPORT_TITLE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_settings() {
        let file = settings_file("currency_symbol: \"EUR \"\nreport_title: \"Payroll\"\n");
        let settings = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(settings.currency_symbol, "EUR ");
        assert_eq!(settings.report_title, "Payroll");
    }

    #[test]
    fn test_omitted_keys_fall_back_to_defaults() {
        let file = settings_file("currency_symbol: \"£\"\n");
        let settings = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.report_title, DEFAULT_REPORT_TITLE);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = settings_file("");
        assert_eq!(
            ConfigLoader::load(file.path()).unwrap(),
            PayrollSettings::default()
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/payroll.yaml") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_file_returns_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigReadError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_path_returns_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::ConfigReadError { .. })
        ));
    }

    #[test]
    fn test_unknown_key_returns_parse_error() {
        let file = settings_file("currency: \"$\"\n");
        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(message.contains("currency"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let settings = ConfigLoader::load_or_default(None::<&Path>).unwrap();
        assert_eq!(settings, PayrollSettings::default());
    }
}
