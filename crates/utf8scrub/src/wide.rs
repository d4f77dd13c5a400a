//! UTF-16LE to UTF-8 transcoding.

use alloc::ffi::CString;

use crate::{buffer::OutputBuffer, error::Error};

/// Worst-case UTF-8 size for `len` bytes of 16-bit units, excluding the
/// terminator: every unit may take three bytes.
#[must_use]
pub const fn utf8_capacity(len: usize) -> usize {
    len.saturating_mul(3).saturating_add(1) / 2
}

/// Converts little-endian 16-bit units to UTF-8.
///
/// Conversion stops at the first zero unit, whatever follows it; the input is
/// usually a NUL-terminated wide string inside a larger fixed-size field.
/// Surrogate pairs are not combined: every unit is encoded on its own as a
/// one, two or three byte sequence, so the output is only well-formed UTF-8
/// when the input has no surrogates. A trailing odd byte is ignored.
///
/// # Errors
///
/// Only [`Error::Alloc`].
#[expect(clippy::cast_possible_truncation)]
pub fn utf16le_to_utf8(bytes: &[u8]) -> Result<CString, Error> {
    let mut out = OutputBuffer::with_capacity(utf8_capacity(bytes.len()))?;

    for unit in bytes.chunks_exact(2) {
        let c = u16::from_le_bytes([unit[0], unit[1]]);
        match c {
            0 => break,
            0x01..0x80 => out.push(c as u8),
            0x80..0x800 => {
                out.extend(&[0xC0 | (c >> 6) as u8, 0x80 | (c & 0x3F) as u8]);
            }
            _ => {
                out.extend(&[
                    0xE0 | (c >> 12) as u8,
                    0x80 | ((c >> 6) & 0x3F) as u8,
                    0x80 | (c & 0x3F) as u8,
                ]);
            }
        }
    }

    Ok(out.finish())
}
