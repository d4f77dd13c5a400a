use alloc::collections::TryReserveError;

use thiserror::Error;

/// Why a single encoded character was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte cannot begin a sequence under the active policy. This covers
    /// lone continuation bytes, `0xfe`/`0xff`, and 5- or 6-byte leads where
    /// only four bytes are recognised.
    #[error("byte 0x{0:02x} cannot start a sequence")]
    InvalidLead(u8),
    /// Input ended in the middle of a sequence.
    #[error("truncated sequence: expected {expected} bytes, found {found}")]
    Truncated {
        /// Length announced by the lead byte.
        expected: usize,
        /// Bytes actually available.
        found: usize,
    },
    /// A trailing byte did not match `10xxxxxx`.
    #[error("invalid continuation byte 0x{byte:02x} at position {index} of the sequence")]
    BadContinuation {
        /// The offending byte.
        byte: u8,
        /// Its index within the sequence (the lead is index 0).
        index: usize,
    },
    /// The scalar fits in fewer bytes than were used to encode it.
    #[error("overlong encoding of U+{scalar:04X} in {len} bytes")]
    Overlong {
        /// Decoded value.
        scalar: u32,
        /// Bytes consumed.
        len: usize,
    },
    /// Surrogate, noncharacter, or value beyond U+10FFFF.
    #[error("0x{0:X} is not a valid unicode scalar value")]
    InvalidScalar(u32),
    /// C0 or C1 control character where printable text is required.
    #[error("control character U+{0:04X}")]
    Control(u32),
}

/// Errors surfaced by the string-level operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contains a sequence the operation does not accept.
    #[error("malformed input at byte {offset}: {source}")]
    Malformed {
        /// Offset of the first byte of the rejected sequence.
        offset: usize,
        /// What was wrong with it.
        source: DecodeError,
    },
    /// A caller-supplied output buffer is too small.
    #[error("output capacity of {capacity} bytes exceeded")]
    CapacityExceeded {
        /// Size of the buffer that was offered.
        capacity: usize,
    },
    /// The output buffer could not be allocated.
    #[error("failed to allocate output buffer: {0}")]
    Alloc(#[from] TryReserveError),
}
