//! Optional settings file.
//!
//! Settings only seed the initial options; they are not validated here.
//! Lookup order: `--config <PATH>`, then `PASSFORGE_CONFIG`, then built-in
//! defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::options::GenerationOptions;

pub const CONFIG_ENV: &str = "PASSFORGE_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Initial generation options.
    pub defaults: GenerationOptions,

    /// Clear the clipboard this many seconds after a copy.
    pub clear_after_secs: Option<u64>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::config(format!(
                "settings file {} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Resolve settings from an explicit path or the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => {
                log::info!("loading settings from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn clear_after(&self) -> Option<Duration> {
        self.clear_after_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_fills_defaults() {
        let json = r#"{
            "defaults": { "length": 20, "include_symbols": false },
            "clear_after_secs": 10
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.defaults.length, 20);
        assert!(!settings.defaults.include_symbols);
        assert!(settings.defaults.include_numbers);
        assert_eq!(settings.clear_after(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = Settings::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let res = Settings::from_file(file.path());
        assert!(matches!(res, Err(AppError::Json(_))));
    }
}
