//! Per-kind token counts.

use crate::{Token, TokenKind};

/// How many tokens of each kind a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStats {
    counts: [usize; TokenKind::ALL.len()],
}

impl TokenStats {
    pub fn collect(tokens: &[Token<'_>]) -> Self {
        let mut stats = Self::default();
        for token in tokens {
            stats.counts[Self::index(token.kind)] += 1;
        }
        stats
    }

    /// Position of `kind` in [`TokenKind::ALL`].
    fn index(kind: TokenKind) -> usize {
        match kind {
            TokenKind::EndOfFile => TokenKind::ALL.len() - 1,
            // Discriminants 0..=16 are contiguous
            other => other as usize,
        }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[Self::index(kind)]
    }

    /// Number of tokens, including the end-of-file sentinel.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of error tokens.
    pub fn errors(&self) -> usize {
        TokenKind::ALL
            .into_iter()
            .filter(|kind| kind.is_error())
            .map(|kind| self.count(kind))
            .sum()
    }

    /// Kinds with a non-zero count, in declaration order.
    pub fn nonzero(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }
}
