//! Error types for the heap and the Huffman codec.

use thiserror::Error;

/// Error variants for heap and codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sample text or frequency table contained no symbols.
    #[error("empty input: at least two distinct symbols are required")]
    EmptyInput,

    /// The alphabet has fewer than two distinct symbols, so no binary code exists.
    #[error("alphabet too small: {0} distinct symbol(s), need at least 2")]
    AlphabetTooSmall(usize),

    /// A frequency table entry was zero.
    #[error("non-positive frequency for symbol {0:?}")]
    NonPositiveFrequency(char),

    /// Summing symbol frequencies overflowed `u64`.
    #[error("frequency overflow")]
    FrequencyOverflow,

    /// The value is already present in the heap.
    #[error("value is already in the heap")]
    DuplicateValue,

    /// `decrease_key` was given a key that is not strictly smaller than the current one.
    #[error("new key is not strictly less than the current key")]
    KeyNotDecreased,

    /// The value is not present in the heap.
    #[error("value not in heap")]
    ValueNotFound,

    /// The heap holds no entries.
    #[error("heap is empty")]
    EmptyHeap,

    /// A character outside the codec's alphabet was passed to `compress`.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset within the input.
        position: usize,
    },

    /// A character other than `0` or `1` was passed to `decompress`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// The offending character.
        found: char,
        /// Character offset within the bit string.
        position: usize,
    },

    /// The bit string does not resolve to a whole number of symbols.
    #[error("bit sequence is not decodable (at bit {position})")]
    Undecodable {
        /// Bit offset at which decoding failed.
        position: usize,
    },

    /// `compression_ratio` was requested before anything was compressed.
    #[error("no symbols have been compressed yet")]
    NothingCompressed,

    /// A codec configuration value was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// Tree construction broke one of its own invariants.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, empty, or out-of-range input supplied by the caller.
    InvalidArgument,
    /// A lookup found nothing: absent value or empty heap.
    NotFound,
    /// The operation is not meaningful in the object's current state.
    IllegalState,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ValueNotFound | Error::EmptyHeap => ErrorKind::NotFound,
            Error::NothingCompressed | Error::Internal(_) => ErrorKind::IllegalState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// A specialized Result type for heap and codec operations.
pub type Result<T> = std::result::Result<T, Error>;
