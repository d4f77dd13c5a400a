//! Codepoint classification.

/// Returns `true` if `value` may appear in interchanged text.
///
/// Rejects values past U+10FFFF, the UTF-16 surrogate block, the
/// U+FDD0..=U+FDEF noncharacters, and the last two codepoints of every plane
/// (U+FFFE, U+FFFF, U+1FFFE, ...).
#[must_use]
#[inline]
pub const fn scalar_is_valid(value: u32) -> bool {
    if value >= 0x11_0000 {
        return false;
    }
    if value & 0xFFFF_F800 == 0xD800 {
        return false;
    }
    if value >= 0xFDD0 && value <= 0xFDEF {
        return false;
    }
    value & 0xFFFE != 0xFFFE
}

/// Returns `true` for C0 and C1 control characters.
///
/// Tab and newline are common enough in display strings that they are not
/// treated as controls. DEL (U+007F) is.
#[must_use]
#[inline]
pub const fn is_control(scalar: u32) -> bool {
    (scalar < 0x20 && scalar != 0x09 && scalar != 0x0A)
        || (scalar >= 0x7F && scalar <= 0x9F)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x0000, true)]
    #[case(0x0041, true)]
    #[case(0xD7FF, true)]
    #[case(0xD800, false)]
    #[case(0xDBFF, false)]
    #[case(0xDC00, false)]
    #[case(0xDFFF, false)]
    #[case(0xE000, true)]
    #[case(0xFDCF, true)]
    #[case(0xFDD0, false)]
    #[case(0xFDEF, false)]
    #[case(0xFDF0, true)]
    #[case(0xFFFD, true)]
    #[case(0xFFFE, false)]
    #[case(0xFFFF, false)]
    #[case(0x1_0000, true)]
    #[case(0x1_FFFE, false)]
    #[case(0x10_FFFD, true)]
    #[case(0x10_FFFF, false)]
    #[case(0x11_0000, false)]
    #[case(u32::MAX, false)]
    fn scalar_validity(#[case] value: u32, #[case] expected: bool) {
        assert_eq!(scalar_is_valid(value), expected, "U+{value:04X}");
    }

    #[test]
    fn agrees_with_char_outside_noncharacters() {
        // `char` admits noncharacters; everything else should line up.
        for value in (0..0x11_0000).step_by(7) {
            let nonchar = (0xFDD0..=0xFDEF).contains(&value) || value & 0xFFFE == 0xFFFE;
            if !nonchar {
                assert_eq!(scalar_is_valid(value), char::from_u32(value).is_some());
            }
        }
    }

    #[rstest]
    #[case(0x00, true)]
    #[case(0x01, true)]
    #[case(0x09, false)]
    #[case(0x0A, false)]
    #[case(0x0D, true)]
    #[case(0x1F, true)]
    #[case(0x20, false)]
    #[case(0x7E, false)]
    #[case(0x7F, true)]
    #[case(0x85, true)]
    #[case(0x9F, true)]
    #[case(0xA0, false)]
    fn control_characters(#[case] scalar: u32, #[case] expected: bool) {
        assert_eq!(is_control(scalar), expected, "U+{scalar:04X}");
    }
}
