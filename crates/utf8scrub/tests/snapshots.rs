#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::ffi::CStr;
use core::fmt::Write;

use utf8scrub::{EscapeOptions, ascii, encode_string, escape, utf8};

const INPUTS: &[&CStr] = &[
    c"plain",
    c"h\xc3\xa9llo",
    c"A\xffB",
    c"\xc0\x80x",
    c"tab\there",
    c"a/b c",
    c"\xed\xa0\x80",
];

fn render_pipeline(inputs: &[&CStr]) -> String {
    let options = EscapeOptions::default();
    let mut out = String::new();
    for input in inputs {
        let filtered = utf8::filter(input).expect("filter");
        let stripped = ascii::filter(input).expect("ascii filter");
        let escaped = escape::escape(input, &options).expect("escape");
        writeln!(
            out,
            "{} valid={} printable={} filter={} ascii={} escape={}",
            input.to_bytes().escape_ascii(),
            utf8::is_valid(input).is_some(),
            utf8::is_printable(input.to_bytes()),
            filtered.as_bytes().escape_ascii(),
            stripped.as_bytes().escape_ascii(),
            escaped.as_bytes().escape_ascii(),
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_pipeline_stages() {
    insta::assert_snapshot!(render_pipeline(INPUTS), @r#"
    plain valid=true printable=true filter=plain ascii=plain escape=plain
    h\xc3\xa9llo valid=true printable=true filter=h\xc3\xa9llo ascii=hllo escape=h\xc3\xa9llo
    A\xffB valid=false printable=false filter=A_B ascii=AB escape=A\\xffB
    \xc0\x80x valid=false printable=false filter=__x ascii=x escape=\\xc0\\x80x
    tab\there valid=true printable=true filter=tab\there ascii=tab\there escape=tab\\x09here
    a/b c valid=true printable=true filter=a/b c ascii=a/b c escape=a\\x2fb\\x20c
    \xed\xa0\x80 valid=false printable=true filter=___ ascii= escape=\\xed\\xa0\\x80
    "#);
}

#[test]
fn snapshot_error_messages() {
    let mut buf = [0u8; 3];
    let errors = [
        utf8::validate(c"ab\xc0\x80").unwrap_err(),
        utf8::validate(c"\xff").unwrap_err(),
        utf8::validate(c"abc\xe2\x82").unwrap_err(),
        utf8::validate(c"\xe2(\xac").unwrap_err(),
        utf8::validate(c"x\xed\xa0\x80").unwrap_err(),
        utf8::validate_printable(b"\xc2\x85").unwrap_err(),
        encode_string(c"abc", &mut buf, &EscapeOptions::default()).unwrap_err(),
    ];
    let mut out = String::new();
    for error in errors {
        writeln!(out, "{error}").unwrap();
    }

    insta::assert_snapshot!(out, @r#"
    malformed input at byte 2: overlong encoding of U+0000 in 2 bytes
    malformed input at byte 0: byte 0xff cannot start a sequence
    malformed input at byte 3: truncated sequence: expected 3 bytes, found 2
    malformed input at byte 0: invalid continuation byte 0x28 at position 1 of the sequence
    malformed input at byte 1: 0xD800 is not a valid unicode scalar value
    malformed input at byte 0: control character U+0085
    output capacity of 3 bytes exceeded
    "#);
}
