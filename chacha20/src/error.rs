use thiserror::Error;

/// Result type with the [`Error`] of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Input validation failures.
///
/// Lengths are reported in the unit of the rejected input: words for the
/// `u32` entry points, bytes for the `u8` ones.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key is not 8 words (32 bytes) long.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// The nonce is not 3 words (12 bytes) long.
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}
