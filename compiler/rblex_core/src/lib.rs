//! Finite-automaton tokenizer for a Ruby-like language.
//!
//! Converts source text into classified [`Token`]s using an explicit state
//! machine with one byte of lookahead (two for `digit . digit`). Malformed
//! input never aborts a run: it becomes an [`Unknown`](TokenKind::Unknown)
//! token and scanning continues. Every run ends with exactly one
//! [`EndOfFile`](TokenKind::EndOfFile) token.
//!
//! ```
//! use rblex_core::{analyze, TokenKind};
//!
//! let kinds: Vec<TokenKind> = analyze("1...5").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::NumberInt,
//!         TokenKind::RangeExclusive,
//!         TokenKind::NumberInt,
//!         TokenKind::EndOfFile,
//!     ]
//! );
//! ```
//!
//! With [`LexerOptions::trace`] enabled, each token also carries the
//! [`Transition`]s the automaton took while scanning it.

pub mod char_class;
mod cursor;
pub mod keywords;
mod lexer;
mod scanner;
mod state;
mod stats;
mod tag;
mod token;
mod trace;

pub use cursor::Cursor;
pub use lexer::{analyze, analyze_with, Lexer, LexerOptions};
pub use scanner::Scanner;
pub use state::State;
pub use stats::TokenStats;
pub use tag::TokenKind;
pub use token::{Span, Token};
pub use trace::{NoTrace, TraceRecorder, TraceSink, Transition};
