//! Single-character UTF-8 decoding.
//!
//! Three levels of strictness are built from the pieces in this module, and
//! they are kept apart on purpose because callers depend on exactly which
//! inputs each one accepts:
//!
//! - [`Overlong::Threshold`] through [`decode_one`]: per-length minimum
//!   values, no scalar range check. Backs [`crate::utf8::is_printable`].
//! - [`Overlong::Threshold`] through [`decode_valid`]: adds the scalar range
//!   check. Backs [`crate::utf8::is_valid`] and [`crate::utf8::filter`].
//! - [`encoded_valid_len`]: high-bit pre-check, minimal-length recomputation
//!   and scalar range check over 1 to 6 byte sequences. Backs
//!   [`crate::escape`].

use crate::{error::DecodeError, scalar::scalar_is_valid};

/// A decoded scalar and the number of bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded value. Not necessarily a valid scalar unless it came from
    /// [`decode_valid`].
    pub scalar: u32,
    /// Bytes consumed, 1 to 6.
    pub len: usize,
}

/// How [`decode_one`] detects overlong encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlong {
    /// Reject a scalar below the smallest value that needs this many bytes
    /// (`0x80` for two, `0x800` for three, `0x10000` for four). Sequences
    /// longer than four bytes are not recognised at all.
    #[default]
    Threshold,
    /// Recompute [`encode_len`] of the decoded scalar and reject a mismatch.
    /// Five- and six-byte sequences are decoded.
    MinimalLength,
}

/// Smallest scalar that needs `len` bytes, indexed by `len`.
const THRESHOLD: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Sequence length announced by a lead byte, or `None` if `lead` cannot
/// start a sequence.
#[must_use]
#[inline]
pub const fn expected_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        _ if lead & 0xE0 == 0xC0 => Some(2),
        _ if lead & 0xF0 == 0xE0 => Some(3),
        _ if lead & 0xF8 == 0xF0 => Some(4),
        _ if lead & 0xFC == 0xF8 => Some(5),
        _ if lead & 0xFE == 0xFC => Some(6),
        _ => None,
    }
}

/// Minimal number of bytes needed to encode `scalar`.
#[must_use]
#[inline]
pub const fn encode_len(scalar: u32) -> usize {
    match scalar {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        0x1_0000..0x20_0000 => 4,
        0x20_0000..0x400_0000 => 5,
        _ => 6,
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

#[inline]
const fn lead_payload(lead: u8, len: usize) -> u32 {
    let mask = match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        4 => 0x07,
        5 => 0x03,
        _ => 0x01,
    };
    (lead & mask) as u32
}

/// Decodes the sequence at the start of `bytes`.
///
/// Only bytes inside `bytes` are ever read; a sequence that runs past the
/// end yields [`DecodeError::Truncated`]. The scalar is range-checked only
/// for overlong encoding, see [`decode_valid`] for the full check.
///
/// # Errors
///
/// [`DecodeError::InvalidLead`], [`DecodeError::Truncated`],
/// [`DecodeError::BadContinuation`] or [`DecodeError::Overlong`].
pub fn decode_one(bytes: &[u8], policy: Overlong) -> Result<Decoded, DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::Truncated {
            expected: 1,
            found: 0,
        });
    };

    let len = match (expected_len(lead), policy) {
        (Some(len), Overlong::MinimalLength) => len,
        (Some(len @ 1..=4), Overlong::Threshold) => len,
        _ => return Err(DecodeError::InvalidLead(lead)),
    };

    let mut scalar = lead_payload(lead, len);
    for index in 1..len {
        let Some(&byte) = bytes.get(index) else {
            return Err(DecodeError::Truncated {
                expected: len,
                found: bytes.len(),
            });
        };
        if !is_continuation(byte) {
            return Err(DecodeError::BadContinuation { byte, index });
        }
        scalar = (scalar << 6) | u32::from(byte & 0x3F);
    }

    let overlong = match policy {
        Overlong::Threshold => scalar < THRESHOLD[len],
        Overlong::MinimalLength => encode_len(scalar) != len,
    };
    if overlong {
        return Err(DecodeError::Overlong { scalar, len });
    }

    Ok(Decoded { scalar, len })
}

/// Like [`decode_one`], and additionally rejects surrogates, noncharacters
/// and values past U+10FFFF.
///
/// # Errors
///
/// Everything [`decode_one`] reports, plus [`DecodeError::InvalidScalar`].
pub fn decode_valid(bytes: &[u8], policy: Overlong) -> Result<Decoded, DecodeError> {
    let decoded = decode_one(bytes, policy)?;
    if !scalar_is_valid(decoded.scalar) {
        return Err(DecodeError::InvalidScalar(decoded.scalar));
    }
    Ok(decoded)
}

/// Validates the character at the start of `bytes` and returns its length.
///
/// ASCII is always accepted. A multi-byte run must have the high bit set on
/// every byte, decode to exactly the minimal length, and be a valid scalar.
/// This is the strictest check in the crate.
///
/// # Errors
///
/// The [`DecodeError`] describing the first problem found.
pub fn encoded_valid_len(bytes: &[u8]) -> Result<usize, DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::Truncated {
            expected: 1,
            found: 0,
        });
    };
    let len = expected_len(lead).ok_or(DecodeError::InvalidLead(lead))?;
    if len == 1 {
        return Ok(1);
    }

    for index in 1..len {
        match bytes.get(index) {
            None => {
                return Err(DecodeError::Truncated {
                    expected: len,
                    found: bytes.len(),
                });
            }
            Some(&byte) if byte & 0x80 == 0 => {
                return Err(DecodeError::BadContinuation { byte, index });
            }
            Some(_) => {}
        }
    }

    decode_valid(&bytes[..len], Overlong::MinimalLength).map(|decoded| decoded.len)
}
