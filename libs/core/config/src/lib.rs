//! Environment-driven configuration shared by the shopping list services.
//!
//! Every settings struct implements [`FromEnv`]; binaries compose them into
//! their own `Config` at startup and pass the result down explicitly.

pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Reads `APP_ENV`; only `production` (any case) selects [`Environment::Production`].
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Name and version reported by the liveness endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Returns the value of the first variable in `keys` that is set.
pub fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}

/// Parses an optional numeric variable, falling back to `default` when unset.
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("SHOPPING_TEST_VAR", Some("value"), || {
            assert_eq!(env_or_default("SHOPPING_TEST_VAR", "default"), "value");
        });
        temp_env::with_var_unset("SHOPPING_TEST_VAR", || {
            assert_eq!(env_or_default("SHOPPING_TEST_VAR", "default"), "default");
        });
    }

    #[test]
    fn test_env_first_prefers_earlier_keys() {
        temp_env::with_vars(
            [
                ("SHOPPING_FIRST", None::<&str>),
                ("SHOPPING_SECOND", Some("second")),
                ("SHOPPING_THIRD", Some("third")),
            ],
            || {
                let value = env_first(&["SHOPPING_FIRST", "SHOPPING_SECOND", "SHOPPING_THIRD"]);
                assert_eq!(value.as_deref(), Some("second"));
            },
        );
    }

    #[test]
    fn test_env_first_none_when_all_unset() {
        temp_env::with_vars_unset(["SHOPPING_A", "SHOPPING_B"], || {
            assert!(env_first(&["SHOPPING_A", "SHOPPING_B"]).is_none());
        });
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("SHOPPING_POOL", || {
            assert_eq!(env_parse_or("SHOPPING_POOL", 7u32).unwrap(), 7);
        });
        temp_env::with_var("SHOPPING_POOL", Some("12"), || {
            assert_eq!(env_parse_or("SHOPPING_POOL", 7u32).unwrap(), 12);
        });
        temp_env::with_var("SHOPPING_POOL", Some("lots"), || {
            let err = env_parse_or("SHOPPING_POOL", 7u32).unwrap_err();
            assert!(err.to_string().contains("SHOPPING_POOL"));
        });
    }

    #[test]
    fn test_app_info_macro_uses_crate_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
