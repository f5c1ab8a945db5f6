//! Error types for wordlist generation.

use thiserror::Error;

/// Fatal errors raised by the generation pipeline and its collaborators.
///
/// Per-term rejections during normalization are *not* represented here;
/// they are logged and the offending term is skipped (see
/// [`crate::normalize::Rejection`]).
#[derive(Error, Debug)]
pub enum WordlistError {
    /// The candidate pool cannot satisfy the requested list length.
    #[error("wordlist too short: {required} unique terms required, only {available} available")]
    InsufficientTerms { required: usize, available: usize },

    /// Numbered output requires the list size to be an exact power of
    /// the dice-sides count.
    #[error("list length {length} is not a power of {sides} (numbered output needs sides^n terms)")]
    InvalidLength { length: usize, sides: usize },

    /// Remote wordlist fetch failed.
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// Downloaded archive could not be decoded or decompressed.
    #[error("corrupt archive: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
