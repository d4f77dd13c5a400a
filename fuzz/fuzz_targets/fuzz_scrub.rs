#![no_main]
use std::ffi::CString;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8scrub::{
    EscapeOptions, Error, ascii, encode_string, escape, is_control, utf8, utf16le_to_utf8,
};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Escape output capacity, kept small so the bound is hit often.
    capacity: u8,
    allow: Vec<u8>,
    data: Vec<u8>,
}

fn scrub(input: Input) {
    let Input {
        capacity,
        allow,
        data,
    } = input;

    // Everything up to the first NUL, as a C caller would see it.
    let text = data.split(|&b| b == 0).next().unwrap_or_default();
    let text = CString::new(text).expect("split removed NUL bytes");

    let repaired = utf8::filter(&text).expect("filter");
    assert!(repaired.as_bytes().len() <= text.as_bytes().len());
    assert!(utf8::is_valid(&repaired).is_some());
    assert_eq!(utf8::filter(&repaired).expect("filter"), repaired);
    if utf8::is_valid(&text).is_some() {
        assert_eq!(repaired, text);
    }

    let stripped = ascii::filter(&text).expect("ascii filter");
    assert!(ascii::is_valid(&stripped).is_some());

    // On well-formed UTF-8, printability is exactly the absence of controls.
    let printable = utf8::is_printable(&data);
    if let Ok(s) = core::str::from_utf8(&data) {
        let has_control = s.chars().any(|c| is_control(u32::from(c)));
        assert_eq!(printable, !has_control, "{s:?}");
    }

    let wide = utf16le_to_utf8(&data).expect("transcode");
    assert!(wide.as_bytes().len() <= (data.len() * 3 + 1) / 2);

    let options = EscapeOptions::allowing(&allow);
    let escaped = escape::escape(&text, &options).expect("escape");
    let mut buf = vec![0u8; usize::from(capacity)];
    match encode_string(&text, &mut buf, &options) {
        Ok(written) => assert_eq!(&buf[..=written], escaped.as_bytes_with_nul()),
        Err(Error::CapacityExceeded { .. }) => {
            assert!(escaped.as_bytes_with_nul().len() > buf.len());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
}

fuzz_target!(|input: Input| scrub(input));
