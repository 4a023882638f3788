//! Factory configuration.
//!
//! Components that read their settings from a file can describe a factory
//! with [`FactoryConfig`] and build it with [`crate::Factory::from_config`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::joiner::Joiner;

/// Serializable description of a [`crate::Factory`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Joiner character; [`Joiner::DEFAULT`] when unset.
    pub joiner: Option<Joiner>,
    /// Prefix stamped on every wrapped error.
    pub prefix: String,
}

/// Errors raised while interpreting configuration input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The joiner string was empty.
    #[error("joiner must not be empty")]
    EmptyJoiner,
    /// The joiner string held more than one character.
    #[error("joiner must be a single character, got {0:?}")]
    JoinerTooLong(String),
}

impl FactoryConfig {
    /// Parse a joiner from textual input such as a command line flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyJoiner`] for an empty string and
    /// [`ConfigError::JoinerTooLong`] when more than one character is given.
    pub fn parse_joiner(input: &str) -> Result<Joiner, ConfigError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ConfigError::EmptyJoiner),
            (Some(c), None) => Ok(Joiner::new(c)),
            (Some(_), Some(_)) => Err(ConfigError::JoinerTooLong(input.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(".", Ok(Joiner::DEFAULT))]
    #[case("/", Ok(Joiner::new('/')))]
    #[case("", Err(ConfigError::EmptyJoiner))]
    #[case("::", Err(ConfigError::JoinerTooLong("::".into())))]
    fn parse_joiner_cases(#[case] input: &str, #[case] expected: Result<Joiner, ConfigError>) {
        assert_eq!(FactoryConfig::parse_joiner(input), expected);
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(ConfigError::EmptyJoiner.to_string(), "joiner must not be empty");
        assert_eq!(
            ConfigError::JoinerTooLong("ab".into()).to_string(),
            "joiner must be a single character, got \"ab\""
        );
    }
}
