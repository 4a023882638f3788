//! Factories that stamp a fixed prefix onto errors.
//!
//! A [`Factory`] is created once per component with that component's prefix
//! and then used to wrap errors as they propagate upward. Wrapping a value
//! that already went through a factory collapses the chain, so the result is
//! always a single [`WrappedError`] whose prefix lists every layer.
//!
//! ```
//! use errwrap::{Factory, WrapErrors};
//!
//! let svc = Factory::with_prefix('.', "svc");
//! let api = Factory::with_prefix('.', "api");
//!
//! let err = svc.wrap_string("disk full", Some("io")).expect("non-empty text");
//! let err = api.wrap(err, Some("retry"));
//! assert_eq!(err.to_string(), "api.svc: [retry] disk full");
//! ```

use tracing::{debug, trace};

use crate::{
    config::FactoryConfig,
    error::{ErrorValue, RawError},
    joiner::Joiner,
    wrapped::{WrappedError, flatten},
};

/// Construction operations shared by error factories.
pub trait WrapErrors {
    /// Wrap `err`, or return `None` when there is no error to wrap.
    fn wrap_error<E>(&self, err: Option<E>, message: Option<&str>) -> Option<WrappedError>
    where
        E: Into<ErrorValue>;

    /// Wrap a new [`RawError`] built from `text`, or return `None` when
    /// `text` is empty.
    fn wrap_string(&self, text: &str, message: Option<&str>) -> Option<WrappedError>;
}

/// Immutable prefix and joiner pair that produces [`WrappedError`] values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Factory {
    prefix: String,
    joiner: Joiner,
}

impl Factory {
    /// Create a factory with an empty prefix.
    #[must_use]
    pub fn new(joiner: impl Into<Joiner>) -> Self { Self::with_prefix(joiner, String::new()) }

    /// Create a factory labelling errors with `prefix`.
    #[must_use]
    pub fn with_prefix(joiner: impl Into<Joiner>, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            joiner: joiner.into(),
        }
    }

    /// Build a factory from deserialised settings.
    #[must_use]
    pub fn from_config(config: &FactoryConfig) -> Self {
        Self::with_prefix(config.joiner.unwrap_or_default(), config.prefix.clone())
    }

    /// Derive a factory for a sub-component, appending `segment` to this
    /// factory's prefix.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self {
            prefix: self.joiner.join(&self.prefix, segment),
            joiner: self.joiner,
        }
    }

    /// The prefix stamped on every wrapped error; possibly empty.
    #[must_use]
    pub fn prefix(&self) -> &str { &self.prefix }

    /// The joiner used when merging nested prefixes.
    #[must_use]
    pub fn joiner(&self) -> Joiner { self.joiner }

    /// Wrap `err` under this factory's prefix.
    ///
    /// Nested wrappers are collapsed: the result's prefix is this factory's
    /// prefix followed by every prefix found in the chain, joined with this
    /// factory's joiner. Only `message` survives; annotations from earlier
    /// wrap steps are discarded.
    #[must_use]
    pub fn wrap(&self, err: impl Into<ErrorValue>, message: Option<&str>) -> WrappedError {
        let flattened = flatten(err.into(), self.joiner);
        let prefix = self.joiner.join(&self.prefix, &flattened.prefix);
        trace!(
            prefix = %prefix,
            depth = flattened.depth,
            "wrapped error"
        );
        WrappedError::from_parts(prefix, message, flattened.terminal, self.joiner)
    }
}

impl WrapErrors for Factory {
    fn wrap_error<E>(&self, err: Option<E>, message: Option<&str>) -> Option<WrappedError>
    where
        E: Into<ErrorValue>,
    {
        let Some(err) = err else {
            debug!(prefix = %self.prefix, "no error to wrap");
            return None;
        };
        Some(self.wrap(err, message))
    }

    fn wrap_string(&self, text: &str, message: Option<&str>) -> Option<WrappedError> {
        if text.is_empty() {
            debug!(prefix = %self.prefix, "empty error text; nothing to wrap");
            return None;
        }
        Some(WrappedError::from_parts(
            self.prefix.clone(),
            message,
            Some(ErrorValue::Raw(RawError::new(text))),
            self.joiner,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn svc() -> Factory { Factory::with_prefix('.', "svc") }

    #[rstest]
    fn wrap_string_builds_raw_leaf(svc: Factory) {
        let err = svc.wrap_string("disk full", Some("io")).expect("wrapped");
        assert_eq!(err.prefix(), "svc");
        assert_eq!(err.message(), Some("io"));
        assert!(matches!(err.inner(), Some(ErrorValue::Raw(raw)) if raw.message() == "disk full"));
        assert_eq!(err.joiner(), Joiner::DEFAULT);
    }

    #[rstest]
    fn wrap_string_uses_factory_joiner() {
        let err = Factory::with_prefix('/', "svc")
            .wrap_string("x", None)
            .expect("wrapped");
        assert_eq!(err.joiner(), Joiner::new('/'));
    }

    #[rstest]
    fn wrap_foreign_error_keeps_it_as_inner(svc: Factory) {
        let err = svc.wrap(io::Error::other("reset"), None);
        assert_eq!(err.to_string(), "svc: reset");
        assert!(matches!(err.inner(), Some(ErrorValue::Foreign(_))));
    }

    #[rstest]
    fn wrap_discards_inner_message(svc: Factory) {
        let inner = svc.wrap_string("disk full", Some("io")).expect("wrapped");
        let outer = Factory::with_prefix('.', "api").wrap(inner, None);
        assert_eq!(outer.message(), None);
        assert_eq!(outer.to_string(), "api.svc: disk full");
    }

    #[rstest]
    fn wrap_uses_outer_joiner_for_every_segment() {
        let db = Factory::with_prefix('.', "db").wrap_string("x", None).expect("wrapped");
        let repo = Factory::with_prefix('.', "repo").wrap(db, None);
        let api = Factory::with_prefix('/', "api").wrap(repo, None);
        assert_eq!(api.prefix(), "api/repo/db");
        assert_eq!(api.joiner(), Joiner::new('/'));
    }

    #[rstest]
    fn child_extends_prefix(svc: Factory) {
        assert_eq!(svc.child("cache").prefix(), "svc.cache");
        assert_eq!(Factory::new('.').child("cache").prefix(), "cache");
        assert_eq!(svc.child("").prefix(), "svc");
    }

    #[test]
    fn zero_joiner_falls_back_to_default() {
        assert_eq!(Factory::new(0_u8).joiner(), Joiner::DEFAULT);
        assert_eq!(Factory::default().prefix(), "");
    }
}
