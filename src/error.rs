use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// General-purpose failure for step callbacks and cursors that have no error
/// type of their own.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// A failure described by a message.
    #[error("{0}")]
    Message(Cow<'static, str>),

    /// Catch-all for foreign errors.
    #[error("{0}")]
    Other(#[from] Box<dyn Error + Send + Sync>),
}

impl SeqError {
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        SeqError::Message(message.into())
    }

    /// The message of a `Message` failure, if this is one
    pub fn message(&self) -> Option<&str> {
        match self {
            SeqError::Message(message) => Some(message),
            SeqError::Other(_) => None,
        }
    }
}

impl PartialEq<&str> for SeqError {
    fn eq(&self, other: &&str) -> bool {
        self.message() == Some(*other)
    }
}

/// A failure that interrupted a result-building operation, together with
/// everything accumulated before the failing element.
///
/// The failing element itself never contributes to `partial`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<A, E> {
    /// Accumulator as it stood when the failure was observed
    pub partial: A,
    /// The failure that stopped the traversal
    pub error: E,
}

impl<A, E> Partial<A, E> {
    pub fn new(partial: A, error: E) -> Self {
        Partial { partial, error }
    }

    pub fn into_parts(self) -> (A, E) {
        (self.partial, self.error)
    }

    pub fn into_error(self) -> E {
        self.error
    }

    pub fn map_partial<B>(self, f: impl FnOnce(A) -> B) -> Partial<B, E> {
        Partial {
            partial: f(self.partial),
            error: self.error,
        }
    }
}

impl<A, E: fmt::Display> fmt::Display for Partial<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<A, E> Error for Partial<A, E>
where
    A: fmt::Debug,
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
