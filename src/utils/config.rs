//! Environment-backed configuration parsing
//!
//! All runtime settings come from environment variables (optionally loaded
//! from a `.env` file by the caller). These helpers parse them into whatever
//! type the setting needs, falling back safely when a variable is unset or
//! malformed.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// An unset variable falls back silently; a set-but-unparseable value is
/// logged before the default is used.
pub fn get_env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring unparseable {name}={raw}: {e:?}");
            default
        }
    }
}

/// Reads and parses an environment variable, `None` when unset or unparseable
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_uses_default() {
        assert_eq!(get_env_or_default("PORTFOLIO_TEST_UNSET_VAR", 7u32), 7);
        assert_eq!(get_env_or_none::<u32>("PORTFOLIO_TEST_UNSET_VAR"), None);
    }

    #[test]
    fn test_set_variable_parses() {
        env::set_var("PORTFOLIO_TEST_SET_VAR", "42");
        assert_eq!(get_env_or_default("PORTFOLIO_TEST_SET_VAR", 0u32), 42);
        assert_eq!(get_env_or_none::<u32>("PORTFOLIO_TEST_SET_VAR"), Some(42));
    }

    #[test]
    fn test_unparseable_variable_uses_default() {
        env::set_var("PORTFOLIO_TEST_BAD_VAR", "not-a-number");
        assert_eq!(get_env_or_default("PORTFOLIO_TEST_BAD_VAR", 3u32), 3);
        assert_eq!(get_env_or_none::<u32>("PORTFOLIO_TEST_BAD_VAR"), None);
    }
}
