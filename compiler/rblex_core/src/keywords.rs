//! Keyword resolution for local-identifier lexemes.
//!
//! Only lexemes that the automaton finished in the local-identifier state
//! reach this module. Uppercase-led names were already split off into the
//! constant state, so `Class` or `BEGIN` never get here.
//!
//! The lookup uses the lexeme length as a first-pass filter (keywords range
//! from 2-8 bytes), then matches exactly against the keywords of that
//! length. Prefix matches do not count: `classify` is an identifier.

use crate::TokenKind;

/// The closed keyword set, alphabetical.
pub const KEYWORDS: [&str; 36] = [
    "alias", "and", "begin", "break", "case", "class", "def", "defined?", "do", "else", "elsif",
    "end", "ensure", "false", "for", "if", "in", "module", "next", "nil", "not", "or", "redo",
    "rescue", "retry", "return", "self", "super", "then", "true", "undef", "unless", "until",
    "when", "while", "yield",
];

/// Returns `true` if `text` is exactly one of [`KEYWORDS`].
#[inline]
pub fn is_keyword(text: &str) -> bool {
    // Guard: all keywords are 2-8 bytes and start with a lowercase letter
    if !(2..=8).contains(&text.len()) {
        return false;
    }
    if !text.as_bytes()[0].is_ascii_lowercase() {
        return false;
    }

    match text.len() {
        2 => matches!(text, "do" | "if" | "in" | "or"),
        3 => matches!(text, "and" | "def" | "end" | "for" | "nil" | "not"),
        4 => matches!(
            text,
            "case" | "else" | "next" | "redo" | "self" | "then" | "true" | "when"
        ),
        5 => matches!(
            text,
            "alias"
                | "begin"
                | "break"
                | "class"
                | "elsif"
                | "false"
                | "retry"
                | "super"
                | "undef"
                | "until"
                | "while"
                | "yield"
        ),
        6 => matches!(text, "ensure" | "module" | "rescue" | "return" | "unless"),
        8 => text == "defined?",
        _ => false,
    }
}

/// Classify a finished local-identifier lexeme.
///
/// Returns [`TokenKind::Keyword`] for exact keyword matches and
/// [`TokenKind::IdentifierLocal`] otherwise.
#[inline]
pub fn classify_local(text: &str) -> TokenKind {
    if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::IdentifierLocal
    }
}

#[cfg(test)]
mod tests;
