//! Whole-run properties of the tokenizer, checked on generated input.

#![allow(
    clippy::unwrap_used,
    reason = "proptest macros and test assertions use unwrap"
)]

use proptest::prelude::*;
use rblex_core::char_class::is_whitespace;
use rblex_core::{analyze, analyze_with, LexerOptions, Token, TokenKind};

/// One syntactically self-contained lexeme.
fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,8}",
        "[A-Z][a-zA-Z0-9_]{0,6}",
        "@[a-z_][a-z0-9]{0,5}",
        "@@[a-z_][a-z0-9]{0,5}",
        "\\$[a-z_][a-z0-9]{0,5}",
        ":[a-z_][a-z0-9]{0,5}",
        "0|[1-9][0-9]{0,5}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "0x[0-9a-fA-F]{1,4}",
        "\"[a-z #.]{0,6}\"",
        prop::sample::select(vec![
            "=", "==", "=>", "+", "+=", "-", "-=", "*", "**", "*=", "/", "/=", "|", "||", "<",
            "<=", ">", ">=", "!", "!=", ".", "..", "...", "(", ")", "[", "]", "{", "}", ",", ";",
        ])
        .prop_map(str::to_owned),
    ]
}

/// Atoms joined by single spaces.
fn snippet() -> impl Strategy<Value = String> {
    prop::collection::vec(atom(), 1..8).prop_map(|atoms| atoms.join(" "))
}

fn summary<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
    tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

proptest! {
    #[test]
    fn always_ends_with_single_sentinel(source in "\\PC{0,200}") {
        let tokens = analyze(&source);
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::EndOfFile);
        prop_assert_eq!(last.lexeme, "");
        prop_assert!(last.transitions.is_empty());
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn spans_are_nonempty_ordered_and_exact(source in "\\PC{0,200}") {
        let tokens = analyze(&source);
        let mut prev_end = 0u32;
        for token in tokens.iter().filter(|t| !t.is_eof()) {
            prop_assert!(!token.lexeme.is_empty());
            prop_assert!(token.span.start >= prev_end);
            prop_assert_eq!(
                &source[token.span.start as usize..token.span.end as usize],
                token.lexeme
            );
            prev_end = token.span.end;
        }
    }

    #[test]
    fn gaps_between_tokens_are_whitespace(source in "[ -~\\t\\n\\r]{0,200}") {
        let tokens = analyze(&source);
        let mut rebuilt = String::new();
        let mut prev_end = 0usize;
        for token in &tokens {
            let gap = &source[prev_end..token.span.start as usize];
            prop_assert!(gap.bytes().all(is_whitespace), "gap {:?}", gap);
            rebuilt.push_str(gap);
            rebuilt.push_str(token.lexeme);
            prev_end = token.span.end as usize;
        }
        rebuilt.push_str(&source[prev_end..]);
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn line_is_one_plus_preceding_newlines(source in "[ -~\\n]{0,200}") {
        for token in analyze(&source) {
            let newlines = source[..token.span.start as usize]
                .bytes()
                .filter(|&b| b == b'\n')
                .count();
            prop_assert_eq!(token.line as usize, newlines + 1);
        }
    }

    #[test]
    fn trace_never_changes_tokens(source in "\\PC{0,120}") {
        let plain = analyze_with(&source, LexerOptions::default());
        let traced = analyze_with(&source, LexerOptions::default().with_trace(true));
        prop_assert_eq!(plain.len(), traced.len());
        for (p, t) in plain.iter().zip(&traced) {
            prop_assert_eq!((p.kind, p.lexeme, p.line, p.span), (t.kind, t.lexeme, t.line, t.span));
        }
    }

    #[test]
    fn traces_start_at_start_and_end_accepting(source in "[ -~\\n]{0,120}") {
        for token in analyze_with(&source, LexerOptions::default().with_trace(true)) {
            if let (Some(first), Some(last)) = (token.transitions.first(), token.transitions.last()) {
                prop_assert_eq!(first.from, rblex_core::State::Start);
                prop_assert_eq!(last.to, rblex_core::State::Accept(token.kind));
                prop_assert!(token.transitions[..token.transitions.len() - 1]
                    .iter()
                    .all(|t| !t.to.is_accepting()));
            }
        }
    }

    #[test]
    fn concatenation_is_context_free(a in snippet(), b in snippet()) {
        let joined = format!("{a} {b}");
        let left = analyze(&a);
        let right = analyze(&b);
        let both = analyze(&joined);

        let mut expected = summary(&left);
        expected.extend(summary(&right));
        prop_assert_eq!(summary(&both), expected);
    }

    #[test]
    fn generated_atoms_scan_as_one_token(a in atom()) {
        let tokens = analyze(&a);
        prop_assert_eq!(tokens.len(), 2, "{:?}", tokens);
        prop_assert!(!tokens[0].kind.is_error());
        prop_assert_eq!(tokens[0].lexeme, a.as_str());
    }
}
