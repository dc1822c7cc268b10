//! Character classes of the addr-spec grammar.
//!
//! Every class is a `u128` bitset over the 7-bit range, built at compile
//! time. A byte of 128 or above belongs to no class.

/// The special characters: `( ) < > @ , ; : \ " . [ ]`.
pub const SPECIALS: &[u8] = b"()<>@,;:\\\".[]";

const fn range_except(lo: u8, hi: u8, except: &[u8]) -> u128 {
    let mut mask = 0u128;
    let mut c = lo;
    while c <= hi {
        mask |= 1u128 << c;
        c += 1;
    }
    let mut i = 0;
    while i < except.len() {
        mask &= !(1u128 << except[i]);
        i += 1;
    }
    mask
}

const SPECIAL_MASK: u128 = range_except(0, 127, &[]) & !range_except(0, 127, SPECIALS);
const ATOM_MASK: u128 = range_except(33, 126, SPECIALS);
const QTEXT_MASK: u128 = range_except(32, 126, b"\"\\");
const DTEXT_MASK: u128 = range_except(32, 126, b"[]\\");
const CTEXT_MASK: u128 = range_except(32, 126, b"()\\");
const CTL_MASK: u128 = range_except(0, 31, &[]) | 1u128 << 127;

#[inline]
const fn in_mask(mask: u128, b: u8) -> bool {
    b < 128 && mask & (1u128 << b) != 0
}

/// One of the thirteen special characters.
#[inline]
pub const fn is_special(b: u8) -> bool {
    in_mask(SPECIAL_MASK, b)
}

/// A character that may appear in an atom: 33–126 minus the specials.
#[inline]
pub const fn is_atom_char(b: u8) -> bool {
    in_mask(ATOM_MASK, b)
}

/// Verbatim content of a quoted-string.
#[inline]
pub const fn is_qtext(b: u8) -> bool {
    in_mask(QTEXT_MASK, b)
}

/// Verbatim content of a domain-literal.
#[inline]
pub const fn is_dtext(b: u8) -> bool {
    in_mask(DTEXT_MASK, b)
}

/// Verbatim content of a comment.
#[inline]
pub const fn is_ctext(b: u8) -> bool {
    in_mask(CTEXT_MASK, b)
}

/// Control character: 0–31 and DEL.
#[inline]
pub const fn is_ctl(b: u8) -> bool {
    in_mask(CTL_MASK, b)
}

/// Linear white space: space or horizontal tab.
#[inline]
pub const fn is_lwsp(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specials_are_exactly_thirteen() {
        let count = (0u8..=255).filter(|&b| is_special(b)).count();
        assert_eq!(count, 13);
        for &b in SPECIALS {
            assert!(is_special(b), "{:?} should be special", b as char);
            assert!(!is_atom_char(b));
        }
    }

    #[test]
    fn atom_chars_exclude_space_controls_and_high_bytes() {
        assert!(is_atom_char(b'a'));
        assert!(is_atom_char(b'~'));
        assert!(is_atom_char(b'!'));
        assert!(!is_atom_char(b' '));
        assert!(!is_atom_char(0x7f));
        assert!(!is_atom_char(b'\t'));
        assert!(!is_atom_char(0xc3));
        assert_eq!((0u8..=255).filter(|&b| is_atom_char(b)).count(), 94 - 13);
    }

    #[test]
    fn quoted_text_classes() {
        assert!(is_qtext(b' '));
        assert!(is_qtext(b'('));
        assert!(!is_qtext(b'"'));
        assert!(!is_qtext(b'\\'));
        assert!(is_dtext(b'"'));
        assert!(!is_dtext(b'['));
        assert!(!is_dtext(b']'));
        assert!(is_ctext(b'"'));
        assert!(!is_ctext(b'('));
        assert!(!is_ctext(b')'));
        for b in [b'\r', b'\n', 0u8, 0x7f, 0x80] {
            assert!(!is_qtext(b) && !is_dtext(b) && !is_ctext(b));
        }
    }

    #[test]
    fn control_characters() {
        assert!(is_ctl(0));
        assert!(is_ctl(b'\r'));
        assert!(is_ctl(31));
        assert!(is_ctl(127));
        assert!(!is_ctl(b' '));
        assert!(!is_ctl(200));
        assert!(is_lwsp(b'\t') && is_lwsp(b' ') && !is_lwsp(b'\n'));
    }
}
