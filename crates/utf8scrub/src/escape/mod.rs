//! Identifier-safe escaping.
//!
//! Maps arbitrary bytes onto `[0-9A-Za-z#+-.:=@_]` plus a caller-chosen set
//! of extra bytes. Anything else, and the backslash itself, becomes a
//! four-byte `\xHH` escape with lowercase hex digits. Multi-byte UTF-8
//! characters that pass [`encoded_valid_len`] are kept intact, so readable
//! non-ASCII names stay readable. The scheme is reversible, which makes the
//! output suitable as a path component or device name.
//!
//! ```rust
//! use utf8scrub::escape::{EscapeOptions, escape};
//!
//! let out = escape(c"h\xc3\xa9llo w\xf6rld", &EscapeOptions::default()).unwrap();
//! assert_eq!(out.as_bytes(), "héllo\\x20w\\xf6rld".as_bytes());
//! ```

mod writer;

use alloc::ffi::CString;
use core::ffi::CStr;

use writer::{BoundedWriter, Sink};

use crate::{buffer::OutputBuffer, decode::encoded_valid_len, error::Error};

/// Punctuation allowed through unescaped in addition to ASCII alphanumerics.
pub const SAFE_PUNCTUATION: &[u8] = b"#+-.:=@_";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Options for [`encode_string`] and [`escape`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeOptions<'a> {
    /// Extra bytes to pass through unescaped, e.g. `b"/"` to keep path
    /// separators.
    ///
    /// A backslash is always escaped, even when listed here, since it
    /// introduces escapes in the output.
    ///
    /// # Default
    ///
    /// Empty.
    pub allow: &'a [u8],
}

impl<'a> EscapeOptions<'a> {
    /// Options allowing the bytes in `allow` through unescaped.
    #[must_use]
    pub const fn allowing(allow: &'a [u8]) -> Self {
        Self { allow }
    }
}

/// Returns `true` if `byte` is in the default alphabet or in `allow`.
#[must_use]
#[inline]
pub fn is_whitelisted(byte: u8, allow: &[u8]) -> bool {
    byte.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&byte) || allow.contains(&byte)
}

#[inline]
fn hex_escape(byte: u8) -> [u8; 4] {
    [
        b'\\',
        b'x',
        HEX_DIGITS[usize::from(byte >> 4)],
        HEX_DIGITS[usize::from(byte & 0x0F)],
    ]
}

fn encode_into<S: Sink>(
    bytes: &[u8],
    sink: &mut S,
    options: &EscapeOptions<'_>,
) -> Result<(), Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        let rest = &bytes[offset..];

        if let Ok(len @ 2..) = encoded_valid_len(rest) {
            sink.write(&rest[..len])?;
            offset += len;
            continue;
        }

        let byte = rest[0];
        if byte == b'\\' || !is_whitelisted(byte, options.allow) {
            sink.write(&hex_escape(byte))?;
        } else {
            sink.write(&[byte])?;
        }
        offset += 1;
    }
    Ok(())
}

/// Escapes `input` into `out` and NUL-terminates it.
///
/// The length of `out` is a hard capacity that also has to hold the
/// terminator; `4 * input.len() + 1` always suffices. Returns the number of
/// bytes written before the terminator.
///
/// # Errors
///
/// [`Error::CapacityExceeded`] if the escaped text and its terminator do
/// not fit. The contents of `out` are unspecified in that case.
pub fn encode_string(
    input: &CStr,
    out: &mut [u8],
    options: &EscapeOptions<'_>,
) -> Result<usize, Error> {
    let mut writer = BoundedWriter::new(out);
    encode_into(input.to_bytes(), &mut writer, options)?;
    writer.finish()
}

/// Escapes `input` into a newly allocated string.
///
/// # Errors
///
/// Only [`Error::Alloc`].
pub fn escape(input: &CStr, options: &EscapeOptions<'_>) -> Result<CString, Error> {
    let bytes = input.to_bytes();
    let mut out = OutputBuffer::with_capacity(bytes.len().saturating_mul(4))?;
    encode_into(bytes, &mut out, options)?;
    Ok(out.finish())
}
