//! The composite wrapper node and its prefix-merging rules.
//!
//! A [`WrappedError`] renders as `prefix: [message] inner`, leaving out any
//! section that is empty. When a factory wraps a value that is itself a
//! wrapper, the whole run of nested wrappers is collapsed into one node by
//! [`flatten`]: prefixes are joined outer to inner, empty prefixes are
//! skipped, and the first non-wrapper value becomes the new inner error.

use std::{
    error::Error,
    fmt::{self, Write as _},
};

use crate::{error::ErrorValue, joiner::Joiner};

/// Separator written between a non-empty prefix and the rest of the message.
pub const PREFIX_SEPARATOR: &str = ": ";

/// An error labelled with a prefix and an optional one-shot annotation.
///
/// ```
/// use errwrap::{RawError, WrappedError};
///
/// let err = WrappedError::new("svc", Some(RawError::new("disk full").into())).with_message("io");
/// assert_eq!(err.to_string(), "svc: [io] disk full");
/// ```
#[derive(Debug)]
pub struct WrappedError {
    prefix: String,
    message: Option<String>,
    inner: Option<ErrorValue>,
    joiner: Joiner,
}

impl WrappedError {
    /// Create a wrapper around `inner` without flattening it.
    ///
    /// Prefer [`crate::Factory`] for routine wrapping; this constructor keeps
    /// `inner` exactly as given, even when it is another wrapper.
    #[must_use]
    pub fn new(prefix: impl Into<String>, inner: Option<ErrorValue>) -> Self {
        Self {
            prefix: prefix.into(),
            message: None,
            inner,
            joiner: Joiner::DEFAULT,
        }
    }

    /// Attach an annotation. Empty annotations are dropped.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message.into());
        self
    }

    /// Override the joiner recorded on this node.
    ///
    /// A factory merging this node uses its own joiner instead.
    #[must_use]
    pub fn with_joiner(mut self, joiner: impl Into<Joiner>) -> Self {
        self.joiner = joiner.into();
        self
    }

    pub(crate) fn from_parts(
        prefix: String,
        message: Option<&str>,
        inner: Option<ErrorValue>,
        joiner: Joiner,
    ) -> Self {
        Self {
            prefix,
            message: message.map(str::to_owned).and_then(non_empty),
            inner,
            joiner,
        }
    }

    /// This node's prefix; possibly empty.
    #[must_use]
    pub fn prefix(&self) -> &str { &self.prefix }

    /// The annotation attached at this wrap step, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    /// The joiner this node was created with.
    #[must_use]
    pub fn joiner(&self) -> Joiner { self.joiner }

    /// One-step unwrap: the wrapped value, if any.
    #[must_use]
    pub fn inner(&self) -> Option<&ErrorValue> { self.inner.as_ref() }

    /// Consume the wrapper and return the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> Option<ErrorValue> { self.inner }
}

fn non_empty(s: String) -> Option<String> { if s.is_empty() { None } else { Some(s) } }

impl WrappedError {
    fn render_into(&self, out: &mut String) -> fmt::Result {
        if !self.prefix.is_empty() {
            out.push_str(&self.prefix);
            out.push_str(PREFIX_SEPARATOR);
        }
        if let Some(message) = &self.message {
            write!(out, "[{message}]")?;
        }
        if let Some(inner) = &self.inner {
            if self.message.is_some() {
                out.push(' ');
            }
            write!(out, "{inner}")?;
        }
        Ok(())
    }
}

/// Width, fill and alignment apply to the rendered message as a whole.
impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.render_into(&mut rendered)?;
        f.pad(&rendered)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_ref().map(|inner| inner.as_error() as &(dyn Error + 'static))
    }
}

/// Result of collapsing a run of nested wrappers.
#[derive(Debug)]
pub(crate) struct Flattened {
    /// Non-empty prefixes of every collapsed node, outer to inner.
    pub(crate) prefix: String,
    /// First value that is not a wrapper, or `None` if the chain ended early.
    pub(crate) terminal: Option<ErrorValue>,
    /// Number of wrapper nodes collapsed.
    pub(crate) depth: usize,
}

/// Walk `value` through nested wrappers, joining every prefix with `joiner`.
///
/// Empty prefixes are transparent: they neither stop the walk nor add a
/// joiner.
pub(crate) fn flatten(value: ErrorValue, joiner: Joiner) -> Flattened {
    let mut prefix = String::new();
    let mut depth = 0;
    let mut current = Some(value);
    loop {
        match current {
            Some(ErrorValue::Wrapped(node)) => {
                let WrappedError {
                    prefix: segment,
                    inner,
                    ..
                } = *node;
                prefix = joiner.join(&prefix, &segment);
                depth += 1;
                current = inner;
            }
            terminal => {
                return Flattened {
                    prefix,
                    terminal,
                    depth,
                };
            }
        }
    }
}
