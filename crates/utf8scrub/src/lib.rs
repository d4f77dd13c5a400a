//! Validation, repair and transcoding for untrusted byte strings.
//!
//! Everything here operates on raw bytes rather than `str`, because the
//! inputs are exactly the ones Rust's own string types refuse to hold:
//! truncated sequences, overlong encodings, surrogates and noncharacters,
//! stray control characters. Each operation is a pure function over its
//! input; the crate holds no global state and never panics on any input.
//!
//! The building blocks, from the bottom up:
//!
//! - [`scalar`]: classifies raw codepoint values.
//! - [`decode`]: measures and decodes a single UTF-8 sequence under one of
//!   two overlong policies.
//! - [`utf8`]: whole-string validation, printability checks and repair.
//! - [`ascii`]: the 7-bit analog of [`utf8`].
//! - [`wide`]: UTF-16LE to UTF-8 transcoding.
//! - [`escape`]: a reversible `\xHH` escaping scheme for identifiers.
//!
//! ```rust
//! use utf8scrub::{escape, utf8};
//!
//! let repaired = utf8::filter(c"A\xffB").unwrap();
//! assert_eq!(repaired.as_bytes(), b"A_B");
//!
//! let escaped = escape::escape(c"a/b", &escape::EscapeOptions::default()).unwrap();
//! assert_eq!(escaped.as_bytes(), br"a\x2fb");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod buffer;
mod error;

pub mod ascii;
pub mod decode;
pub mod escape;
pub mod scalar;
pub mod utf8;
pub mod wide;

#[cfg(test)]
mod tests;

pub use decode::{
    Decoded, Overlong, decode_one, decode_valid, encode_len, encoded_valid_len, expected_len,
};
pub use error::{DecodeError, Error};
pub use escape::{EscapeOptions, encode_string};
pub use scalar::{is_control, scalar_is_valid};
pub use wide::utf16le_to_utf8;

/// The byte substituted for each malformed sequence by [`utf8::filter`].
pub const FILLER: u8 = b'_';
