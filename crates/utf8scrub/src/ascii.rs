//! 7-bit ASCII validation and stripping.

use alloc::ffi::CString;
use core::ffi::CStr;

use bstr::ByteSlice;

use crate::{buffer::OutputBuffer, error::Error};

/// Returns `input` unchanged if every byte is below `0x80`.
#[must_use]
pub fn is_valid(input: &CStr) -> Option<&CStr> {
    input
        .to_bytes()
        .find_non_ascii_byte()
        .is_none()
        .then_some(input)
}

/// Copies `input` with every byte `>= 0x80` dropped.
///
/// # Errors
///
/// Only [`Error::Alloc`].
pub fn filter(input: &CStr) -> Result<CString, Error> {
    let bytes = input.to_bytes();
    let mut out = OutputBuffer::with_capacity(bytes.len())?;
    for &byte in bytes {
        if byte.is_ascii() {
            out.push(byte);
        }
    }
    Ok(out.finish())
}
