//! Token categories produced by the automaton.
//!
//! The set is closed: every token the scanner emits carries exactly one of
//! these eighteen kinds. Names returned by [`TokenKind::name`] are stable and
//! appear verbatim in rendered output and in JSON.
//!
//! # Discriminant Layout
//!
//! ```text
//! 0-2    numeric literals
//! 3      string literal
//! 4-8    identifier family
//! 9-13   symbols, keywords, punctuation, comments
//! 14-15  ranges
//! 16     error
//! 255    end of stream
//! ```

/// Category of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum TokenKind {
    // === Numeric Literals ===
    /// Decimal integer: `0`, `42`.
    NumberInt = 0,
    /// Decimal float with digits on both sides of the dot: `3.14`.
    NumberFloat = 1,
    /// Hexadecimal integer with at least one digit: `0x1A`.
    NumberHex = 2,

    /// Double-quoted string, quotes included.
    StringLiteral = 3,

    // === Identifier Family ===
    /// Lowercase- or underscore-led name that is not a keyword.
    IdentifierLocal = 4,
    /// `@name`
    IdentifierInstance = 5,
    /// `@@name`
    IdentifierClass = 6,
    /// `$name`
    IdentifierGlobal = 7,
    /// Uppercase-led name.
    Constant = 8,

    /// `:name`
    Symbol = 9,
    /// Member of the fixed keyword set.
    Keyword = 10,
    /// Operator, simple or compound.
    Operator = 11,
    /// One of `()[]{},;`.
    Separator = 12,
    /// `#` through end of line, newline excluded.
    Comment = 13,

    // === Ranges ===
    /// `..`
    RangeInclusive = 14,
    /// `...`
    RangeExclusive = 15,

    /// Any input that starts no recognized construct, or a construct left
    /// incomplete (unterminated string, bare hex prefix).
    Unknown = 16,

    /// Sentinel appended once after the last real token.
    EndOfFile = 255,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::NumberInt,
        TokenKind::NumberFloat,
        TokenKind::NumberHex,
        TokenKind::StringLiteral,
        TokenKind::IdentifierLocal,
        TokenKind::IdentifierInstance,
        TokenKind::IdentifierClass,
        TokenKind::IdentifierGlobal,
        TokenKind::Constant,
        TokenKind::Symbol,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Comment,
        TokenKind::RangeInclusive,
        TokenKind::RangeExclusive,
        TokenKind::Unknown,
        TokenKind::EndOfFile,
    ];

    /// Stable display name, e.g. `"NUMBER_INT"`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::NumberInt => "NUMBER_INT",
            TokenKind::NumberFloat => "NUMBER_FLOAT",
            TokenKind::NumberHex => "NUMBER_HEX",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::IdentifierLocal => "IDENTIFIER_LOCAL",
            TokenKind::IdentifierInstance => "IDENTIFIER_INSTANCE",
            TokenKind::IdentifierClass => "IDENTIFIER_CLASS",
            TokenKind::IdentifierGlobal => "IDENTIFIER_GLOBAL",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::RangeInclusive => "RANGE_INCLUSIVE",
            TokenKind::RangeExclusive => "RANGE_EXCLUSIVE",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfFile => "END_OF_FILE",
        }
    }

    /// Kinds produced for malformed input.
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Unknown)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
