//! Byte classification predicates used to choose automaton transitions.
//!
//! All predicates operate on single ASCII bytes. Bytes `>= 0x80` (UTF-8 lead
//! or continuation bytes) belong to no category, and the sentinel `0x00`
//! belongs to none either, so every "eat while" loop stops at end of input.

/// 256-byte lookup table for identifier body bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_BODY_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// ASCII letter of either case.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Lowercase letter or underscore: starts a local identifier.
#[inline]
pub fn is_lower_start(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'_'
}

/// Letter or underscore: may follow a `@`, `@@`, `$` or `:` prefix.
#[inline]
pub fn is_name_start(b: u8) -> bool {
    is_letter(b) || b == b'_'
}

#[inline]
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Letter, digit, or underscore.
#[inline]
pub fn is_ident_body(b: u8) -> bool {
    IS_IDENT_BODY_TABLE[b as usize]
}

/// Space, tab, carriage return, or newline. Vertical tab and form feed are
/// not skipped.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// One of `()[]{},;`.
#[inline]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b';')
}
