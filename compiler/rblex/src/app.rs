//! One end-to-end invocation: obtain source, tokenize, print.

use std::io::{self, BufRead, Write};

use rblex_core::{analyze_with, TokenStats};
use tracing::debug;

use crate::cli::{CliOptions, Format};
use crate::input::{self, SourceError};
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tokenize the source selected by `options` and print it to `out`.
///
/// Without a path in `options`, the file name is prompted for on `out` and
/// read from `stdin`.
pub fn run<R: BufRead, W: Write>(
    options: &CliOptions,
    stdin: R,
    out: &mut W,
) -> Result<(), RunError> {
    let path = match &options.path {
        Some(path) => path.clone(),
        None => input::prompt_path(stdin, &mut *out)?,
    };
    debug!(path = %path.display(), "reading source");
    let source = input::read_source(&path)?;

    if options.show_source {
        render::write_source(out, &source)?;
    }

    let tokens = analyze_with(&source, options.lexer);
    match options.format {
        Format::Text => render::write_tokens(out, &tokens)?,
        Format::Json => render::write_json(out, &tokens)?,
    }

    if options.stats {
        render::write_stats(out, &TokenStats::collect(&tokens))?;
    }
    Ok(())
}
