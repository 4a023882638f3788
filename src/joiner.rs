//! Separator placed between prefixes when chains are flattened.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character used to join two prefixes.
///
/// The NUL character (and the byte `0`) stand for "unset" and resolve to
/// [`Joiner::DEFAULT`].
///
/// ```
/// use errwrap::Joiner;
/// assert_eq!(Joiner::new('\0'), Joiner::DEFAULT);
/// assert_eq!(Joiner::from(b'/').as_char(), '/');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub struct Joiner(char);

impl Joiner {
    /// The default joiner, `.`.
    pub const DEFAULT: Joiner = Joiner('.');

    /// Create a joiner, substituting [`Joiner::DEFAULT`] for `'\0'`.
    #[must_use]
    pub const fn new(c: char) -> Self {
        if c == '\0' { Self::DEFAULT } else { Self(c) }
    }

    /// The joiner as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char { self.0 }

    /// Join `left` and `right`, leaving the joiner out when either is empty.
    #[must_use]
    pub fn join(self, left: &str, right: &str) -> String {
        match (left.is_empty(), right.is_empty()) {
            (true, _) => right.to_owned(),
            (_, true) => left.to_owned(),
            (false, false) => {
                let capacity = left.len() + self.0.len_utf8() + right.len();
                let mut joined = String::with_capacity(capacity);
                joined.push_str(left);
                joined.push(self.0);
                joined.push_str(right);
                joined
            }
        }
    }
}

impl Default for Joiner {
    fn default() -> Self { Self::DEFAULT }
}

impl From<char> for Joiner {
    fn from(c: char) -> Self { Self::new(c) }
}

impl From<u8> for Joiner {
    fn from(byte: u8) -> Self { Self::new(char::from(byte)) }
}

impl From<Joiner> for char {
    fn from(joiner: Joiner) -> Self { joiner.0 }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
