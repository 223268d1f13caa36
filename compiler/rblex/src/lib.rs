//! Command-line front end for the `rblex_core` tokenizer.
//!
//! The binary reads one Ruby source file (named on the command line, or
//! asked for interactively) and prints its tokens as text or JSON.

mod app;
mod cli;
mod input;
mod logging;
mod render;

pub use app::{run, RunError};
pub use cli::{CliOptions, Format, UsageError, USAGE};
pub use input::{prompt_path, read_source, SourceError, PROMPT};
pub use logging::init_tracing;
pub use render::{write_json, write_source, write_stats, write_tokens, BANNER, RULE};
