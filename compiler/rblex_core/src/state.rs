//! The closed automaton state set.
//!
//! A fresh `Start` state is created for every token scan and discarded once
//! the token is finalized. `Accept(kind)` is the terminal state a finalize
//! step moves into; it only ever appears as the `to` side of a
//! [`Transition`](crate::Transition).

use crate::TokenKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum State {
    Start,

    // === Identifier Family ===
    InIdentifierLocal,
    InConstant,
    SawAt,
    InInstanceVar,
    SawDoubleAt,
    InClassVar,
    SawDollar,
    InGlobalVar,
    SawColon,
    InSymbol,

    // === Numbers ===
    /// A leading `0`: may become hex, float, or stay a plain integer.
    SawZero,
    InNumberInt,
    InNumberFloat,
    InHexNumber,

    // === Strings & Comments ===
    InString,
    /// Just consumed a backslash that escapes the closing `"`.
    InStringEscape,
    InSingleString,
    /// Just consumed a backslash that escapes the closing `'`.
    InSingleStringEscape,
    InComment,

    // === Dots ===
    SawDot,
    InRange,

    // === Operators ===
    SawEquals,
    SawPlus,
    SawMinus,
    SawStar,
    SawSlash,
    SawPipe,
    SawLess,
    SawGreater,
    SawBang,

    /// Terminal: the token has been finalized with this kind.
    Accept(TokenKind),
}

impl State {
    /// Stable display name, e.g. `"IN_HEX_NUMBER"`.
    ///
    /// `Accept` states render through [`Display`](std::fmt::Display) as
    /// `ACCEPT(KIND)`; `name()` returns only the `"ACCEPT"` prefix for them.
    pub const fn name(self) -> &'static str {
        match self {
            State::Start => "START",
            State::InIdentifierLocal => "IN_IDENTIFIER_LOCAL",
            State::InConstant => "IN_CONSTANT",
            State::SawAt => "SAW_AT",
            State::InInstanceVar => "IN_INSTANCE_VAR",
            State::SawDoubleAt => "SAW_DOUBLE_AT",
            State::InClassVar => "IN_CLASS_VAR",
            State::SawDollar => "SAW_DOLLAR",
            State::InGlobalVar => "IN_GLOBAL_VAR",
            State::SawColon => "SAW_COLON",
            State::InSymbol => "IN_SYMBOL",
            State::SawZero => "SAW_ZERO",
            State::InNumberInt => "IN_NUMBER_INT",
            State::InNumberFloat => "IN_NUMBER_FLOAT",
            State::InHexNumber => "IN_HEX_NUMBER",
            State::InString => "IN_STRING",
            State::InStringEscape => "IN_STRING_ESCAPE",
            State::InSingleString => "IN_SINGLE_STRING",
            State::InSingleStringEscape => "IN_SINGLE_STRING_ESCAPE",
            State::InComment => "IN_COMMENT",
            State::SawDot => "SAW_DOT",
            State::InRange => "IN_RANGE",
            State::SawEquals => "SAW_EQUALS",
            State::SawPlus => "SAW_PLUS",
            State::SawMinus => "SAW_MINUS",
            State::SawStar => "SAW_STAR",
            State::SawSlash => "SAW_SLASH",
            State::SawPipe => "SAW_PIPE",
            State::SawLess => "SAW_LESS",
            State::SawGreater => "SAW_GREATER",
            State::SawBang => "SAW_BANG",
            State::Accept(_) => "ACCEPT",
        }
    }

    pub const fn is_accepting(self) -> bool {
        matches!(self, State::Accept(_))
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Accept(kind) => write!(f, "ACCEPT({kind})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests;
