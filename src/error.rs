//! Error values that can appear in a wrapped chain.
//!
//! [`ErrorValue`] is the closed set of things a [`WrappedError`] may hold as
//! its inner error: a plain [`RawError`] leaf, another [`WrappedError`], or
//! any foreign error type.

use std::{error::Error, fmt, sync::Arc};

use crate::wrapped::WrappedError;

/// Boxed foreign error held by [`ErrorValue::Foreign`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Leaf error carrying only a message.
///
/// ```
/// use errwrap::RawError;
/// assert_eq!(RawError::new("disk full").to_string(), "disk full");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RawError(String);

impl RawError {
    /// Create a leaf error from `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self { Self(message.into()) }

    /// The message this error was created with.
    #[must_use]
    pub fn message(&self) -> &str { &self.0 }
}

/// A value that can sit inside a [`WrappedError`].
///
/// Any `E: Error + Send + Sync + 'static` converts into an `ErrorValue`. The
/// conversion inspects the concrete type once, so a [`WrappedError`] or
/// [`RawError`] passed in as a generic error still lands in its own variant,
/// including when it sits behind a `Box` or an `Arc`. A shared `Arc` cannot
/// be taken apart, so an `Arc<WrappedError>` with other live handles stays
/// [`ErrorValue::Foreign`] and is not flattened.
///
/// `ErrorValue` deliberately does not implement [`std::error::Error`]; doing
/// so would conflict with the blanket conversion. Use
/// [`ErrorValue::as_error`] to obtain a trait object.
#[derive(Debug)]
pub enum ErrorValue {
    /// A leaf created from a string.
    Raw(RawError),
    /// A nested wrapper.
    Wrapped(Box<WrappedError>),
    /// Any other error type.
    Foreign(BoxError),
}

impl ErrorValue {
    /// Classify a boxed error, recovering [`RawError`] and [`WrappedError`]
    /// values hidden behind the trait object.
    #[must_use]
    pub fn from_boxed(error: BoxError) -> Self {
        let error = match error.downcast::<WrappedError>() {
            Ok(wrapped) => return Self::Wrapped(wrapped),
            Err(error) => error,
        };
        let error = match error.downcast::<Box<WrappedError>>() {
            Ok(wrapped) => return Self::Wrapped(*wrapped),
            Err(error) => error,
        };
        let error = match error.downcast::<Arc<WrappedError>>() {
            Ok(shared) => {
                return match Arc::try_unwrap(*shared) {
                    Ok(wrapped) => Self::Wrapped(Box::new(wrapped)),
                    Err(shared) => Self::Foreign(Box::new(shared)),
                };
            }
            Err(error) => error,
        };
        let error = match error.downcast::<RawError>() {
            Ok(raw) => return Self::Raw(*raw),
            Err(error) => error,
        };
        let error = match error.downcast::<Box<RawError>>() {
            Ok(raw) => return Self::Raw(**raw),
            Err(error) => error,
        };
        match error.downcast::<Arc<RawError>>() {
            Ok(raw) => Self::Raw(Arc::unwrap_or_clone(*raw)),
            Err(error) => Self::Foreign(error),
        }
    }

    /// Borrow the held error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self {
            Self::Raw(raw) => raw,
            Self::Wrapped(wrapped) => wrapped.as_ref(),
            Self::Foreign(error) => error.as_ref(),
        }
    }

    /// Returns the wrapper if this value is [`ErrorValue::Wrapped`].
    #[must_use]
    pub fn as_wrapped(&self) -> Option<&WrappedError> {
        match self {
            Self::Wrapped(wrapped) => Some(wrapped.as_ref()),
            Self::Raw(_) | Self::Foreign(_) => None,
        }
    }

    /// True for values that never wrap anything else.
    #[must_use]
    pub fn is_terminal(&self) -> bool { !matches!(self, Self::Wrapped(_)) }

    /// Convert into a boxed trait object.
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        match self {
            Self::Raw(raw) => Box::new(raw),
            Self::Wrapped(wrapped) => wrapped,
            Self::Foreign(error) => error,
        }
    }
}

impl<E> From<E> for ErrorValue
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self { Self::from_boxed(Box::new(error)) }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn classifies_raw_error() {
        let value = ErrorValue::from(RawError::new("boom"));
        assert!(matches!(value, ErrorValue::Raw(ref raw) if raw.message() == "boom"));
    }

    #[test]
    fn classifies_boxed_wrapped_error() {
        let boxed: BoxError = Box::new(WrappedError::new("svc", None));
        let value = ErrorValue::from_boxed(boxed);
        assert_eq!(value.as_wrapped().map(WrappedError::prefix), Some("svc"));
        assert!(!value.is_terminal());
    }

    #[test]
    fn classifies_wrappers_behind_smart_pointers() {
        let boxed = ErrorValue::from(Box::new(WrappedError::new("svc", None)));
        assert_eq!(boxed.as_wrapped().map(WrappedError::prefix), Some("svc"));

        let arc = ErrorValue::from(Arc::new(WrappedError::new("api", None)));
        assert_eq!(arc.as_wrapped().map(WrappedError::prefix), Some("api"));

        let raw = ErrorValue::from(Arc::new(RawError::new("leaf")));
        assert!(matches!(raw, ErrorValue::Raw(ref raw) if raw.message() == "leaf"));
    }

    #[test]
    fn shared_arc_wrapper_stays_foreign() {
        let shared = Arc::new(WrappedError::new("svc", None));
        let value = ErrorValue::from(Arc::clone(&shared));
        assert!(matches!(value, ErrorValue::Foreign(_)));
        assert_eq!(value.to_string(), shared.to_string());
    }

    #[test]
    fn keeps_foreign_errors_foreign() {
        let value = ErrorValue::from(io::Error::other("socket closed"));
        assert!(matches!(value, ErrorValue::Foreign(_)));
        assert_eq!(value.to_string(), "socket closed");
        assert!(value.as_error().downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn into_boxed_preserves_concrete_type() {
        let boxed = ErrorValue::from(RawError::new("leaf")).into_boxed();
        assert_eq!(
            boxed.downcast_ref::<RawError>().map(RawError::message),
            Some("leaf")
        );
    }
}
