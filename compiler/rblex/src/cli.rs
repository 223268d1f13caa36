//! Command-line option parsing.

use std::path::PathBuf;

use rblex_core::LexerOptions;

pub const USAGE: &str = "\
Usage: rblex [<file>] [options]

Tokenizes <file>, or prompts for a file name when none is given.

Options:
  --trace                     Show the automaton transitions for each token
  --no-escapes                Let a backslash before the closing quote end the string
  --single-quotes             Accept '...' strings as well as \"...\"
  --single-char-comparisons   Never combine <, > or ! with a following =
  --automaton                 Shorthand for --trace --no-escapes --single-char-comparisons
  --format=<text|json>        Output format (default: text)
  --show-source               Print the source text before the tokens
  --stats                     Print per-kind token counts after the tokens
  -h, --help                  Show this message";

/// Output format for the token listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Format::Text),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unknown format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
    #[error("unexpected argument '{0}': only one file may be given")]
    ExtraArgument(String),
}

/// Everything the binary needs to know about one invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Source file; `None` means prompt on stdin.
    pub path: Option<PathBuf>,
    pub lexer: LexerOptions,
    pub format: Format,
    pub show_source: bool,
    pub stats: bool,
    pub help: bool,
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = CliOptions::default();

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--trace" => options.lexer.trace = true,
                "--no-escapes" => options.lexer.string_escapes = false,
                "--single-char-comparisons" => options.lexer.compound_comparisons = false,
                "--single-quotes" => options.lexer.single_quoted_strings = true,
                "--automaton" => options.lexer = LexerOptions::automaton(),
                "--show-source" => options.show_source = true,
                "--stats" => options.stats = true,
                "-h" | "--help" => options.help = true,
                _ => {
                    if let Some(value) = arg.strip_prefix("--format=") {
                        options.format = Format::parse(value)
                            .ok_or_else(|| UsageError::UnknownFormat(value.to_string()))?;
                    } else if arg.starts_with('-') {
                        return Err(UsageError::UnknownFlag(arg));
                    } else if options.path.is_some() {
                        return Err(UsageError::ExtraArgument(arg));
                    } else {
                        options.path = Some(PathBuf::from(arg));
                    }
                }
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_prompt() {
        let options = CliOptions::parse(Vec::<String>::new());
        assert_eq!(options, Ok(CliOptions::default()));
    }

    #[test]
    fn file_and_flags_in_any_order() {
        let options = CliOptions::parse(["--trace", "code.rb", "--stats", "--format=json"]);
        let Ok(options) = options else {
            panic!("valid arguments rejected: {options:?}");
        };
        assert_eq!(options.path, Some(PathBuf::from("code.rb")));
        assert!(options.lexer.trace);
        assert!(options.stats);
        assert_eq!(options.format, Format::Json);
    }

    #[test]
    fn dialect_flags() {
        let options = CliOptions::parse(["--no-escapes", "--single-char-comparisons"]);
        assert_eq!(
            options.map(|o| o.lexer),
            Ok(LexerOptions::default()
                .with_string_escapes(false)
                .with_compound_comparisons(false))
        );
        let quotes = CliOptions::parse(["--single-quotes"]);
        assert_eq!(
            quotes.map(|o| o.lexer),
            Ok(LexerOptions::default().with_single_quoted_strings(true))
        );
        let automaton = CliOptions::parse(["--automaton"]);
        assert_eq!(automaton.map(|o| o.lexer), Ok(LexerOptions::automaton()));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert_eq!(
            CliOptions::parse(["--verbose"]),
            Err(UsageError::UnknownFlag("--verbose".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_format() {
        assert_eq!(
            CliOptions::parse(["--format=xml"]),
            Err(UsageError::UnknownFormat("xml".to_string()))
        );
    }

    #[test]
    fn rejects_second_file() {
        assert_eq!(
            CliOptions::parse(["a.rb", "b.rb"]),
            Err(UsageError::ExtraArgument("b.rb".to_string()))
        );
    }

    #[test]
    fn help_flag() {
        assert_eq!(CliOptions::parse(["-h"]).map(|o| o.help), Ok(true));
        assert!(USAGE.contains("--format=<text|json>"));
    }
}
