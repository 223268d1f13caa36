//! Token and span types produced by the scanner.

use crate::{TokenKind, Transition};

/// Byte range `start..end` of a lexeme in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

}

/// One unit of lexical output.
///
/// `lexeme` borrows the exact source text the token spans. It is empty only
/// for the [`EndOfFile`](TokenKind::EndOfFile) sentinel. `transitions` is
/// empty unless tracing was enabled and the token went through a state loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// 1-based line of the token's first character.
    pub line: u32,
    pub span: Span,
    pub transitions: Vec<Transition>,
}

impl<'src> Token<'src> {
    /// The end-of-stream sentinel at byte offset `pos`.
    pub fn end_of_file(pos: u32, line: u32) -> Self {
        Self {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line,
            span: Span::point(pos),
            transitions: Vec::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
