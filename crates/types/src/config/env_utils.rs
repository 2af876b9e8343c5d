//! Helpers for reading configuration from the process environment.

use crate::ConfigError;
use std::{env, path::PathBuf};
use url::Url;

/// Load a variable from the environment
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    load_string_opt(key).ok_or_else(|| ConfigError::missing(key))
}

/// Load a variable from the environment. Empty values count as unset.
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load a boolean from the environment. Accepts `true`/`false`, `1`/`0`
/// and `yes`/`no`.
pub fn load_bool_opt(key: &str) -> Result<Option<bool>, ConfigError> {
    let Some(val) = load_string_opt(key) else { return Ok(None) };
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::ParseBool(key.to_string())),
    }
}

/// Load a URL from the environment
pub fn load_url_opt(key: &str) -> Result<Option<Url>, ConfigError> {
    load_string_opt(key).map(|v| Url::parse(v.trim())).transpose().map_err(Into::into)
}

/// Load a path from the environment
pub fn load_path_opt(key: &str) -> Option<PathBuf> {
    load_string_opt(key).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its keys; tests run in parallel.

    #[test]
    fn strings() {
        env::set_var("REBALANCER_TEST_STRING", "develop");
        env::set_var("REBALANCER_TEST_EMPTY", "  ");
        assert_eq!(load_string("REBALANCER_TEST_STRING").unwrap(), "develop");
        assert_eq!(load_string_opt("REBALANCER_TEST_EMPTY"), None);
        assert!(matches!(
            load_string("REBALANCER_TEST_UNSET"),
            Err(ConfigError::Var(key)) if key == "REBALANCER_TEST_UNSET"
        ));
    }

    #[test]
    fn booleans() {
        env::set_var("REBALANCER_TEST_BOOL_YES", "Yes");
        env::set_var("REBALANCER_TEST_BOOL_ZERO", "0");
        env::set_var("REBALANCER_TEST_BOOL_BAD", "maybe");
        assert_eq!(load_bool_opt("REBALANCER_TEST_BOOL_YES").unwrap(), Some(true));
        assert_eq!(load_bool_opt("REBALANCER_TEST_BOOL_ZERO").unwrap(), Some(false));
        assert_eq!(load_bool_opt("REBALANCER_TEST_BOOL_UNSET").unwrap(), None);
        assert!(matches!(
            load_bool_opt("REBALANCER_TEST_BOOL_BAD"),
            Err(ConfigError::ParseBool(_))
        ));
    }

    #[test]
    fn urls_and_paths() {
        env::set_var("REBALANCER_TEST_URL", "http://localhost:8545");
        env::set_var("REBALANCER_TEST_URL_BAD", "not a url");
        env::set_var("REBALANCER_TEST_PATH", "build/contracts");
        assert_eq!(
            load_url_opt("REBALANCER_TEST_URL").unwrap().unwrap().as_str(),
            "http://localhost:8545/"
        );
        assert!(load_url_opt("REBALANCER_TEST_URL_BAD").is_err());
        assert_eq!(load_path_opt("REBALANCER_TEST_PATH"), Some(PathBuf::from("build/contracts")));
    }
}
