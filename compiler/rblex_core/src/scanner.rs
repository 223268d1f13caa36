//! Finite-automaton scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Scanning a token has two phases:
//!
//! 1. [`enter`](Scanner::enter) looks at the first byte and either picks a
//!    loop state or yields an immediate single-character token. Immediate
//!    tokens never record transitions.
//! 2. [`step`](Scanner::step) is the transition function: one exhaustive
//!    `match` over [`State`] that inspects the current byte (and, for
//!    numbers, one more) and returns an [`Action`]. The loop in
//!    [`run`](Scanner::run) applies actions until one of them accepts.
//!
//! Every consuming action consumes exactly one character and records one
//! transition; every non-consuming accept records one transition whose
//! character is the lookahead. The trace sink is a type parameter, so the
//! untraced scanner carries no recording cost.
//!
//! # Lines
//!
//! The scanner bumps the cursor's line counter once for every `\n` it
//! consumes, both while skipping whitespace and inside strings. A token
//! reports the line it started on.

use tracing::trace;

use crate::char_class::{
    is_digit, is_hex_digit, is_ident_body, is_lower_start, is_name_start, is_separator, is_upper,
    is_whitespace,
};
use crate::cursor::Cursor;
use crate::keywords::classify_local;
use crate::trace::{TraceSink, Transition};
use crate::{LexerOptions, Span, State, Token, TokenKind};

/// How the first byte of a token is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    /// Consume the byte and continue in this state.
    Enter(State),
    /// Consume one character and finish immediately.
    Immediate(TokenKind),
}

/// Result of one transition-function evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Consume the current character and remain in the same state.
    Stay,
    /// Consume the current character and move to another state.
    Goto(State),
    /// Finish without consuming the lookahead.
    Accept(TokenKind),
    /// Consume the current character, then finish.
    ConsumeAccept(TokenKind),
}

/// Single-token automaton over a [`Cursor`].
///
/// Holds no per-token state between calls: each [`scan_token`](Self::scan_token)
/// starts from [`State::Start`]. Only the cursor position and line counter
/// carry over.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    options: LexerOptions,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
        }
    }

    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Skip whitespace, then scan one token.
    ///
    /// Returns the [`EndOfFile`](TokenKind::EndOfFile) sentinel once the
    /// source is exhausted, and keeps returning it on later calls.
    pub fn scan_token<S: TraceSink>(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let line = self.cursor.line();
        if self.cursor.is_eof() {
            return Token::end_of_file(start, line);
        }

        let mut sink = S::default();
        let kind = match self.enter(self.cursor.current()) {
            Entry::Immediate(kind) => {
                self.consume();
                kind
            }
            Entry::Enter(state) => {
                let ch = self.consume();
                sink.record(Transition::new(State::Start, ch, state));
                self.run(state, start, &mut sink)
            }
        };

        let end = self.cursor.pos();
        trace!(kind = %kind, line, start, end, "token");
        Token {
            kind,
            lexeme: self.cursor.slice(start, end),
            line,
            span: Span::new(start, end),
            transitions: sink.finish(),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_eof() && is_whitespace(self.cursor.current()) {
            self.consume();
        }
    }

    /// Consume one character, counting it if it is a newline.
    fn consume(&mut self) -> Option<char> {
        let ch = self.cursor.current_char();
        let is_newline = self.cursor.current() == b'\n';
        self.cursor.advance_char();
        if is_newline {
            self.cursor.newline();
        }
        ch
    }

    /// Choose the initial state from the first byte of a token.
    fn enter(&self, b: u8) -> Entry {
        match b {
            b if is_lower_start(b) => Entry::Enter(State::InIdentifierLocal),
            b if is_upper(b) => Entry::Enter(State::InConstant),
            b'0' => Entry::Enter(State::SawZero),
            b if is_digit(b) => Entry::Enter(State::InNumberInt),
            b'@' => Entry::Enter(State::SawAt),
            b'$' => Entry::Enter(State::SawDollar),
            b':' => Entry::Enter(State::SawColon),
            b'#' => Entry::Enter(State::InComment),
            b'"' => Entry::Enter(State::InString),
            b'\'' if self.options.single_quoted_strings => Entry::Enter(State::InSingleString),
            b'.' => Entry::Enter(State::SawDot),
            b'=' => Entry::Enter(State::SawEquals),
            b'+' => Entry::Enter(State::SawPlus),
            b'-' => Entry::Enter(State::SawMinus),
            b'*' => Entry::Enter(State::SawStar),
            b'/' => Entry::Enter(State::SawSlash),
            b'|' => Entry::Enter(State::SawPipe),
            b'<' if self.options.compound_comparisons => Entry::Enter(State::SawLess),
            b'>' if self.options.compound_comparisons => Entry::Enter(State::SawGreater),
            b'!' if self.options.compound_comparisons => Entry::Enter(State::SawBang),
            b'<' | b'>' | b'!' => Entry::Immediate(TokenKind::Operator),
            b if is_separator(b) => Entry::Immediate(TokenKind::Separator),
            // Stray punctuation, control bytes, interior nulls, non-ASCII
            _ => Entry::Immediate(TokenKind::Unknown),
        }
    }

    /// Drive the automaton from `state` until a token kind is accepted.
    fn run<S: TraceSink>(&mut self, mut state: State, start: u32, sink: &mut S) -> TokenKind {
        loop {
            if !S::RECORDS && state == State::InComment {
                self.cursor.eat_until_newline_or_eof();
                return TokenKind::Comment;
            }

            match self.step(state, start) {
                Action::Stay => {
                    let ch = self.consume();
                    sink.record(Transition::new(state, ch, state));
                }
                Action::Goto(next) => {
                    let ch = self.consume();
                    sink.record(Transition::new(state, ch, next));
                    state = next;
                }
                Action::Accept(kind) => {
                    let lookahead = self.cursor.current_char();
                    sink.record(Transition::new(state, lookahead, State::Accept(kind)));
                    return kind;
                }
                Action::ConsumeAccept(kind) => {
                    let ch = self.consume();
                    sink.record(Transition::new(state, ch, State::Accept(kind)));
                    return kind;
                }
            }
        }
    }

    /// The transition function.
    ///
    /// `start` is the byte offset of the token being scanned; only the hex
    /// and identifier states look at the lexeme so far.
    fn step(&self, state: State, start: u32) -> Action {
        let c = self.cursor.current();
        let eof = self.cursor.is_eof();

        match state {
            // Entered only through `enter`; never stepped.
            State::Start => Action::Accept(TokenKind::Unknown),

            // ─── Identifier Family ───────────────────────────────────
            State::InIdentifierLocal => {
                if is_ident_body(c) {
                    Action::Stay
                } else if c == b'?' && self.cursor.slice_from(start) == "defined" {
                    Action::ConsumeAccept(classify_local("defined?"))
                } else {
                    Action::Accept(classify_local(self.cursor.slice_from(start)))
                }
            }
            State::InConstant => Self::name_body(c, TokenKind::Constant),
            State::InInstanceVar => Self::name_body(c, TokenKind::IdentifierInstance),
            State::InClassVar => Self::name_body(c, TokenKind::IdentifierClass),
            State::InGlobalVar => Self::name_body(c, TokenKind::IdentifierGlobal),
            State::InSymbol => Self::name_body(c, TokenKind::Symbol),

            State::SawAt => {
                if c == b'@' {
                    Action::Goto(State::SawDoubleAt)
                } else if is_name_start(c) {
                    Action::Goto(State::InInstanceVar)
                } else {
                    Action::Accept(TokenKind::Operator)
                }
            }
            State::SawDoubleAt => Self::name_start(c, State::InClassVar, TokenKind::Unknown),
            State::SawDollar => Self::name_start(c, State::InGlobalVar, TokenKind::Operator),
            State::SawColon => Self::name_start(c, State::InSymbol, TokenKind::Operator),

            // ─── Numbers ─────────────────────────────────────────────
            State::SawZero => {
                if matches!(c, b'x' | b'X') {
                    Action::Goto(State::InHexNumber)
                } else if c == b'.' && is_digit(self.cursor.peek()) {
                    Action::Goto(State::InNumberFloat)
                } else if is_digit(c) {
                    Action::Goto(State::InNumberInt)
                } else {
                    Action::Accept(TokenKind::NumberInt)
                }
            }
            State::InNumberInt => {
                if is_digit(c) {
                    Action::Stay
                } else if c == b'.' && is_digit(self.cursor.peek()) {
                    Action::Goto(State::InNumberFloat)
                } else {
                    Action::Accept(TokenKind::NumberInt)
                }
            }
            State::InNumberFloat => {
                if is_digit(c) {
                    Action::Stay
                } else {
                    Action::Accept(TokenKind::NumberFloat)
                }
            }
            State::InHexNumber => {
                if is_hex_digit(c) {
                    Action::Stay
                } else if self.cursor.pos() - start <= 2 {
                    // `0x` with no digits
                    Action::Accept(TokenKind::Unknown)
                } else {
                    Action::Accept(TokenKind::NumberHex)
                }
            }

            // ─── Strings & Comments ──────────────────────────────────
            State::InString => self.string_body(b'"', State::InStringEscape),
            State::InSingleString => self.string_body(b'\'', State::InSingleStringEscape),
            // Entered only with the quote as the next character.
            State::InStringEscape => self.escaped_quote(State::InString),
            State::InSingleStringEscape => self.escaped_quote(State::InSingleString),
            State::InComment => {
                if eof || c == b'\n' {
                    Action::Accept(TokenKind::Comment)
                } else {
                    Action::Stay
                }
            }

            // ─── Dots ────────────────────────────────────────────────
            State::SawDot => {
                if c == b'.' {
                    Action::Goto(State::InRange)
                } else {
                    Action::Accept(TokenKind::Operator)
                }
            }
            State::InRange => {
                if c == b'.' {
                    Action::ConsumeAccept(TokenKind::RangeExclusive)
                } else {
                    Action::Accept(TokenKind::RangeInclusive)
                }
            }

            // ─── Operators ───────────────────────────────────────────
            State::SawEquals => Self::operator_tail(matches!(c, b'=' | b'>')),
            State::SawStar => Self::operator_tail(matches!(c, b'*' | b'=')),
            State::SawPipe => Self::operator_tail(c == b'|'),
            State::SawPlus
            | State::SawMinus
            | State::SawSlash
            | State::SawLess
            | State::SawGreater
            | State::SawBang => Self::operator_tail(c == b'='),

            State::Accept(kind) => Action::Accept(kind),
        }
    }

    /// String content up to the closing `quote`. A backslash escapes only
    /// the quote itself.
    fn string_body(&self, quote: u8, escape: State) -> Action {
        let c = self.cursor.current();
        if self.cursor.is_eof() {
            Action::Accept(TokenKind::Unknown)
        } else if c == quote {
            Action::ConsumeAccept(TokenKind::StringLiteral)
        } else if c == b'\\' && self.options.string_escapes && self.cursor.peek() == quote {
            Action::Goto(escape)
        } else {
            Action::Stay
        }
    }

    fn escaped_quote(&self, string: State) -> Action {
        if self.cursor.is_eof() {
            Action::Accept(TokenKind::Unknown)
        } else {
            Action::Goto(string)
        }
    }

    /// Shared body loop of the name-shaped states.
    fn name_body(c: u8, kind: TokenKind) -> Action {
        if is_ident_body(c) {
            Action::Stay
        } else {
            Action::Accept(kind)
        }
    }

    /// Shared prefix states (`@@`, `$`, `:`) that need a name start to continue.
    fn name_start(c: u8, next: State, otherwise: TokenKind) -> Action {
        if is_name_start(c) {
            Action::Goto(next)
        } else {
            Action::Accept(otherwise)
        }
    }

    /// Operators take at most one extra character.
    fn operator_tail(absorbs: bool) -> Action {
        if absorbs {
            Action::ConsumeAccept(TokenKind::Operator)
        } else {
            Action::Accept(TokenKind::Operator)
        }
    }
}
