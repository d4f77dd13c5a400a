use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::CBytes;
use crate::{
    Error, encoded_valid_len,
    escape::{EscapeOptions, encode_string, escape, is_whitelisted},
};

fn tests() -> u64 {
    if is_ci::cached() { 50_000 } else { 5_000 }
}

fn unhex(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Inverse of the escaping, accepting only what `escape` can produce.
fn unescape(mut escaped: &[u8], allow: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    while let Some(&byte) = escaped.first() {
        if byte == b'\\' {
            let [b'x', hi, lo, ..] = escaped[1..] else {
                return None;
            };
            out.push((unhex(hi)? << 4) | unhex(lo)?);
            escaped = &escaped[4..];
        } else if let Ok(len @ 2..) = encoded_valid_len(escaped) {
            out.extend_from_slice(&escaped[..len]);
            escaped = &escaped[len..];
        } else if is_whitelisted(byte, allow) {
            out.push(byte);
            escaped = &escaped[1..];
        } else {
            return None;
        }
    }
    Some(out)
}

/// Property: escaped output only holds alphabet bytes, `\xHH` escapes and
/// whole valid characters, and unescaping restores the input.
#[test]
fn escape_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: CBytes, allow: Vec<u8>) -> bool {
        let options = EscapeOptions::allowing(&allow);
        let out = escape(&input.0, &options).unwrap();
        out.as_bytes().len() <= 4 * input.0.as_bytes().len()
            && unescape(out.as_bytes(), &allow).as_deref() == Some(input.0.as_bytes())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(CBytes, Vec<u8>) -> bool);
}

/// Property: writing into a caller buffer either reproduces the allocating
/// result exactly or fails with `CapacityExceeded`, and never touches bytes
/// past the capacity it was given.
#[test]
fn bounded_encode_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: CBytes, capacity: usize) -> bool {
        let options = EscapeOptions::default();
        let expected = escape(&input.0, &options).unwrap();
        let needed = expected.as_bytes_with_nul().len();
        let capacity = capacity % (needed + 4);

        let mut buf = vec![0xA5u8; capacity + 8];
        let result = encode_string(&input.0, &mut buf[..capacity], &options);
        let untouched = buf[capacity..].iter().all(|&b| b == 0xA5);

        untouched
            && match result {
                Ok(written) => {
                    capacity >= needed && buf[..=written] == *expected.as_bytes_with_nul()
                }
                Err(Error::CapacityExceeded { capacity: reported }) => {
                    capacity < needed && reported == capacity
                }
                Err(_) => false,
            }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(CBytes, usize) -> bool);
}
