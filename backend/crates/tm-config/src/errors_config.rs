use crate::{ConfigError, ConfigErrorResult, MAX_MAX_MESSAGE_LENGTH, MIN_MAX_MESSAGE_LENGTH};

use serde::Deserialize;
use tm_classifier::DEFAULT_MAX_MESSAGE_LENGTH;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ErrorsConfig {
    /// Longest message passed through from an HTTP error to the client
    pub max_message_length: usize,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl ErrorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_MESSAGE_LENGTH..=MAX_MAX_MESSAGE_LENGTH).contains(&self.max_message_length) {
            return Err(ConfigError::errors(format!(
                "errors.max_message_length must be {}-{}, got {}",
                MIN_MAX_MESSAGE_LENGTH, MAX_MAX_MESSAGE_LENGTH, self.max_message_length
            )));
        }

        Ok(())
    }
}
