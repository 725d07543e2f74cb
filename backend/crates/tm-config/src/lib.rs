mod auth_config;
mod config;
mod error;
mod errors_config;
mod hierarchy_config;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use errors_config::ErrorsConfig;
pub use hierarchy_config::HierarchyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_AUTH_REQUIRED: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const MIN_MAX_MESSAGE_LENGTH: usize = 1;
const MAX_MAX_MESSAGE_LENGTH: usize = 4096;
const MAX_MAX_TREE_DEPTH: u32 = 512;
