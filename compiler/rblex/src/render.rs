//! Human-readable and JSON token listings.

use std::io::{self, Write};

use rblex_core::{Token, TokenStats};

pub const BANNER: &str = "--- Analyzing Ruby Code (Finite Automaton) ---";
pub const RULE: &str = "--------------------------";

/// Print the banner, the source text, and a closing rule.
pub fn write_source<W: Write>(out: &mut W, source: &str) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{source}")?;
    writeln!(out, "{RULE}")
}

/// One line per token, each followed by its transitions indented below it.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(
            out,
            "Line {}:\t< {} >\t -> {}",
            token.line, token.lexeme, token.kind
        )?;
        for transition in &token.transitions {
            writeln!(out, "    {transition}")?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out).map_err(serde_json::Error::io)
}

pub fn write_stats<W: Write>(out: &mut W, stats: &TokenStats) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    for (kind, count) in stats.nonzero() {
        writeln!(out, "{kind:<20} {count}")?;
    }
    writeln!(out, "{:<20} {}", "total", stats.total())?;
    writeln!(out, "{:<20} {}", "errors", stats.errors())
}
