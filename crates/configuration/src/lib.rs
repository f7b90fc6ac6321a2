//! # Basic Bettor Configuration
//!
//! Loads the strongly-typed application settings and installs logging.

use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use logging::init_tracing;
pub use settings::{Config, Display, LogLevel, Logging};

/// The file looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bettor";

/// Prefix of environment variables that override file settings,
/// e.g. `BETTOR__DISPLAY__DATE_FORMAT`.
pub const ENV_PREFIX: &str = "BETTOR";

/// Loads the application configuration.
///
/// Settings are layered: built-in defaults, then the TOML file, then
/// `BETTOR__`-prefixed environment variables. An explicit `path` must exist;
/// the default `bettor.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_sections_from_file() {
        let file = write_toml(
            r#"
            [display]
            date_format = "%Y-%m-%d"
            units_precision = 3

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert_eq!(config.display.units_precision, 3);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
        assert_eq!(config.logging.file_prefix, "basic-bettor.log");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file = write_toml("[display]\nunits_precision = 4\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.display.date_format, "%-m/%-d/%Y");
        assert_eq!(config.display.units_precision, 4);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let file = write_toml("[display]\ndate_format = \"\"\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn explicit_path_must_exist() {
        let missing = Path::new("/definitely/not/here/bettor.toml");
        assert!(matches!(load_config(Some(missing)), Err(ConfigError::LoadError(_))));
    }
}
