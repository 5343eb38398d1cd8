//! Error types for seqcodec

use thiserror::Error;

/// Result type alias for seqcodec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error types that can occur in seqcodec
///
/// All errors are caused by invalid input, never by transient external
/// state, so no operation in this crate retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Sequence and quality tracks disagree in length
    #[error("Size of sequence and qualities do not match: {sequence} != {qualities}")]
    LengthMismatch {
        /// Sequence length in bases
        sequence: usize,
        /// Quality string length
        qualities: usize,
    },

    /// Non-ASCII content reached an ASCII-only serialization path
    #[error("{field} must be a valid ASCII string")]
    NonAscii {
        /// Record field that failed the ASCII check
        field: &'static str,
    },

    /// FASTQ output was requested for a record without a quality track
    #[error("Cannot create FASTQ bytes from a record without qualities")]
    MissingQualities,

    /// Record slice bounds fall outside the sequence
    #[error("Slice {start}..{end} out of range for record of length {len}")]
    SliceOutOfRange {
        /// Start of the requested range (inclusive)
        start: usize,
        /// End of the requested range (exclusive)
        end: usize,
        /// Record length
        len: usize,
    },

    /// Packed input is too short for the requested number of bases
    #[error("Insufficient sequence data: need {needed} bytes for {bases} bases, got {got}")]
    InsufficientData {
        /// Packed bytes required
        needed: usize,
        /// Bases requested
        bases: usize,
        /// Packed bytes available
        got: usize,
    },
}
