//! Tokenizer driver: options, the streaming [`Lexer`], and [`analyze`].

use tracing::debug;

use crate::scanner::Scanner;
use crate::trace::{NoTrace, TraceRecorder};
use crate::Token;

/// Behavior switches for one tokenizer run.
///
/// None of these change how many tokens a source splits into except where
/// documented: `trace` only adds diagnostic data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Attach the transition trace to every token.
    pub trace: bool,
    /// A backslash directly before the closing quote escapes it, so `\"`
    /// does not close the string. A backslash before anything else is
    /// ordinary content either way.
    pub string_escapes: bool,
    /// `<`, `>` and `!` absorb a following `=` (`<=`, `>=`, `!=`). When off,
    /// they are always single-character operators.
    pub compound_comparisons: bool,
    /// `'` opens a string closed by the next unescaped `'`. When off, `'` is
    /// an UNKNOWN token.
    pub single_quoted_strings: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerOptions {
    /// Escapes and compound comparisons on; tracing and single-quoted
    /// strings off.
    pub const fn new() -> Self {
        Self {
            trace: false,
            string_escapes: true,
            compound_comparisons: true,
            single_quoted_strings: false,
        }
    }

    /// The plain automaton dialect: no string escapes, single-character
    /// `<`, `>` and `!`, with tracing on.
    pub const fn automaton() -> Self {
        Self {
            trace: true,
            string_escapes: false,
            compound_comparisons: false,
            single_quoted_strings: false,
        }
    }

    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub const fn with_string_escapes(mut self, string_escapes: bool) -> Self {
        self.string_escapes = string_escapes;
        self
    }

    #[must_use]
    pub const fn with_compound_comparisons(mut self, compound_comparisons: bool) -> Self {
        self.compound_comparisons = compound_comparisons;
        self
    }

    #[must_use]
    pub const fn with_single_quoted_strings(mut self, single_quoted_strings: bool) -> Self {
        self.single_quoted_strings = single_quoted_strings;
        self
    }
}

/// Streaming tokenizer over one source text.
///
/// Yields every token including exactly one trailing
/// [`EndOfFile`](crate::TokenKind::EndOfFile), then `None` forever.
/// A `Lexer` is single-use and not meant to be shared across threads; create
/// one per source.
pub struct Lexer<'src> {
    scanner: Scanner<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, options: LexerOptions) -> Self {
        Self {
            scanner: Scanner::new(source, options),
            finished: false,
        }
    }

    /// Scan the next token. After end of input this keeps returning the
    /// end-of-file sentinel.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.scanner.options().trace {
            self.scanner.scan_token::<TraceRecorder>()
        } else {
            self.scanner.scan_token::<NoTrace>()
        }
    }

    /// Current line of the underlying cursor.
    pub fn line(&self) -> u32 {
        self.scanner.cursor().line()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize `source` with default options.
pub fn analyze(source: &str) -> Vec<Token<'_>> {
    analyze_with(source, LexerOptions::default())
}

/// Tokenize `source`, returning every token followed by one end-of-file
/// sentinel.
///
/// Each call scans with its own cursor; calling it twice on the same input
/// yields identical output.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn analyze_with(source: &str, options: LexerOptions) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Lexer::new(source, options).collect();
    debug!(count = tokens.len(), "tokenized");
    tokens
}
