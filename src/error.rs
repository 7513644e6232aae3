use std::io;
use std::sync::Arc;

/// Unified error type for every stream in the crate.
///
/// Streams latch the first error they see and hand it back on every later
/// pull, so the type is `Clone`. Non-clonable sources (`io::Error`, foreign
/// error types) are shared behind an `Arc`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(Arc<io::Error>),
    /// A source produced bytes it could not decode.
    #[error("Corruption: {0}")]
    Corruption(String),
    /// A mapping function rejected an element.
    #[error("Transform failed: {0}")]
    Transform(String),
    /// Error raised by an external collaborator (cursor, page fetch, ...).
    #[error("{0}")]
    External(Arc<dyn std::error::Error + Send + Sync>),
    /// `next()` was called on a stream that reports no further element.
    #[error("stream exhausted")]
    Exhausted,
}

impl Error {
    /// Wrap any foreign error.
    pub fn external<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::External(Arc::new(err))
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(Arc::new(e))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
