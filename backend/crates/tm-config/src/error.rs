use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A value failed validation; `category` names the config section
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn section<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error not tied to one section (e.g. locating the config directory)
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::section("Config", message)
    }

    /// `[server]` section
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::section("Server", message)
    }

    /// `[logging]` section
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::section("Logging", message)
    }

    /// `[errors]` section
    #[track_caller]
    pub fn errors<S: Into<String>>(message: S) -> Self {
        Self::section("Errors", message)
    }

    /// `[hierarchy]` section
    #[track_caller]
    pub fn hierarchy<S: Into<String>>(message: S) -> Self {
        Self::section("Hierarchy", message)
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
