//! Whole-string UTF-8 validation and repair.
//!
//! [`is_valid`], [`validate`] and [`filter`] share one scan: ASCII runs are
//! skipped in bulk, and each multi-byte sequence goes through
//! [`decode_valid`] with the [`Overlong::Threshold`] policy. The printability
//! check is looser about scalar ranges and stricter about control
//! characters; see [`is_printable`].

use alloc::ffi::CString;
use core::ffi::CStr;

use bstr::ByteSlice;

use crate::{
    FILLER,
    buffer::OutputBuffer,
    decode::{Overlong, decode_one, decode_valid},
    error::{DecodeError, Error},
    scalar::is_control,
};

/// Length of the valid span at the start of `rest`: a run of ASCII bytes, or
/// a single multi-byte character.
#[inline]
fn next_span(rest: &[u8]) -> Result<usize, DecodeError> {
    match rest.find_non_ascii_byte() {
        Some(0) => decode_valid(rest, Overlong::Threshold).map(|decoded| decoded.len),
        Some(ascii) => Ok(ascii),
        None => Ok(rest.len()),
    }
}

/// Checks that `input` is well-formed UTF-8 and reports the first problem.
///
/// # Errors
///
/// [`Error::Malformed`] with the offset of the first rejected sequence.
pub fn validate(input: &CStr) -> Result<(), Error> {
    let bytes = input.to_bytes();
    let mut offset = 0;
    while offset < bytes.len() {
        offset +=
            next_span(&bytes[offset..]).map_err(|source| Error::Malformed { offset, source })?;
    }
    Ok(())
}

/// Returns `input` unchanged if it is well-formed UTF-8, `None` otherwise.
///
/// Surrogates, noncharacters and overlong encodings are all rejected. Control
/// characters are not; use [`is_printable`] for display strings.
#[must_use]
pub fn is_valid(input: &CStr) -> Option<&CStr> {
    validate(input).is_ok().then_some(input)
}

/// Copies `input`, replacing every malformed sequence with [`FILLER`].
///
/// After a failure the scan resumes one byte past the start of the rejected
/// sequence, not past the whole sequence, so a bad lead followed by
/// continuation bytes yields one filler per byte. The result is never longer
/// than the input and always passes [`is_valid`].
///
/// # Errors
///
/// Only [`Error::Alloc`].
pub fn filter(input: &CStr) -> Result<CString, Error> {
    let bytes = input.to_bytes();
    let mut out = OutputBuffer::with_capacity(bytes.len())?;

    let mut offset = 0;
    while offset < bytes.len() {
        let rest = &bytes[offset..];
        match next_span(rest) {
            Ok(len) => {
                out.extend(&rest[..len]);
                offset += len;
            }
            Err(error) => {
                substitute(&mut out, rest[0], offset, error);
                offset += 1;
            }
        }
    }

    debug_assert!(out.len() <= bytes.len());
    Ok(out.finish())
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn substitute(out: &mut OutputBuffer, lead: u8, offset: usize, error: DecodeError) {
    trace_event!(
        lead,
        offset,
        %error,
        "replacing malformed sequence with filler"
    );
    out.push(FILLER);
}

/// Checks that `bytes` decodes to text without control characters.
///
/// The scan is length-bounded, so an embedded NUL is just another control
/// character. Overlong encodings are caught by [`Overlong::Threshold`], but
/// the scalar range is not checked: an encoded surrogate or a four-byte value
/// past U+10FFFF is accepted here while [`validate`] rejects it.
///
/// # Errors
///
/// [`Error::Malformed`] with [`DecodeError::Control`] for a control
/// character, or the decoding error of the first malformed sequence.
pub fn validate_printable(bytes: &[u8]) -> Result<(), Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        let decoded = decode_one(&bytes[offset..], Overlong::Threshold)
            .map_err(|source| Error::Malformed { offset, source })?;
        if is_control(decoded.scalar) {
            return Err(Error::Malformed {
                offset,
                source: DecodeError::Control(decoded.scalar),
            });
        }
        offset += decoded.len;
    }
    Ok(())
}

/// Returns `true` if [`validate_printable`] accepts `bytes`.
#[must_use]
pub fn is_printable(bytes: &[u8]) -> bool {
    validate_printable(bytes).is_ok()
}
