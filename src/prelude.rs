//! Optional convenience imports for common wrapping workflows.
//!
//! # Examples
//!
//! ```rust
//! use errwrap::prelude::*;
//!
//! fn read() -> Result<(), WrappedError> {
//!     Err::<(), _>(std::io::Error::other("eof")).wrap_err(&Factory::with_prefix('.', "io"), None)
//! }
//! assert_eq!(read().unwrap_err().to_string(), "io: eof");
//! ```

pub use crate::{
    chain::ResultExt,
    error::{ErrorValue, RawError},
    factory::{Factory, WrapErrors},
    joiner::Joiner,
    wrapped::WrappedError,
};
