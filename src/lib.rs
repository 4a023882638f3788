#![doc(html_root_url = "https://docs.rs/errwrap/latest")]
//! Public API for the `errwrap` library.
//!
//! This crate builds hierarchical, prefixed error messages. A [`Factory`]
//! holds a component prefix and wraps errors (or plain strings) in a
//! [`WrappedError`]; wrapping an already wrapped error collapses the chain
//! so the prefixes of every layer end up in a single node.

pub mod chain;
pub mod config;
pub mod error;
pub mod factory;
pub mod joiner;
pub mod prelude;
pub mod wrapped;

pub use chain::{Chain, ResultExt};
pub use config::{ConfigError, FactoryConfig};
pub use error::{BoxError, ErrorValue, RawError};
pub use factory::{Factory, WrapErrors};
pub use joiner::Joiner;
pub use wrapped::{PREFIX_SEPARATOR, WrappedError};
