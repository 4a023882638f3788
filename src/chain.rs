//! Walking error chains one `source()` step at a time.
//!
//! [`WrappedError`](crate::WrappedError) exposes its inner value through
//! [`Error::source`], so these helpers work on any chain, wrapped or not.

use std::error::Error;

use crate::{error::ErrorValue, factory::Factory, wrapped::WrappedError};

/// Iterator over an error and each of its sources, outermost first.
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a walk at `head`.
    #[must_use]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self { Self { next: Some(head) } }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// The innermost link of the chain starting at `head`.
#[must_use]
pub fn terminal<'a>(head: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    Chain::new(head).last().unwrap_or(head)
}

/// The first link in the chain that is a `T`.
///
/// ```
/// use std::io;
///
/// use errwrap::{Factory, chain::find};
///
/// let err = Factory::with_prefix('.', "net").wrap(io::Error::other("reset"), None);
/// assert!(find::<io::Error>(&err).is_some());
/// ```
#[must_use]
pub fn find<'a, T>(head: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    Chain::new(head).find_map(|link| link.downcast_ref::<T>())
}

/// Number of links in the chain, including `head`.
#[must_use]
pub fn depth(head: &(dyn Error + 'static)) -> usize { Chain::new(head).count() }

/// Wrap the error side of a [`Result`] with a [`Factory`].
pub trait ResultExt<T> {
    /// Map `Err(e)` to `Err(factory.wrap(e, message))`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_err(self, factory: &Factory, message: Option<&str>) -> Result<T, WrappedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ErrorValue>,
{
    fn wrap_err(self, factory: &Factory, message: Option<&str>) -> Result<T, WrappedError> {
        self.map_err(|err| factory.wrap(err, message))
    }
}
