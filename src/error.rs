//! Error type for the crate's few fallible, non-per-code-point entry points.

use thiserror::Error;

/// Errors returned by encoding-id resolution and narrow-codec setup.
///
/// I/O on the [`crate::sink`] adapters uses [`std::io::Error`] directly,
/// since it already lives in that vocabulary.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// `encoding id` is not one of the dense range of known encoding
    /// identifiers (see `Encoding::from_id`).
    #[error("invalid or out-of-range encoding id: {0}")]
    InvalidEncoding(i32),

    /// The narrow codec could not resolve or open a host-charset iconv
    /// descriptor.
    #[error("narrow codec: {0}")]
    Narrow(#[from] std::io::Error),
}
