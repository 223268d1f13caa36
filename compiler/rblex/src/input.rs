//! Getting source text: from a named file, or by asking for a file name.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const PROMPT: &str = "Enter the name of the file to read from: ";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unable to open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read file name: {0}")]
    Prompt(#[source] io::Error),
    #[error("no file name given")]
    EmptyPath,
}

/// Read a source file.
///
/// Invalid UTF-8 is replaced rather than rejected; the replacement
/// characters then scan as UNKNOWN tokens.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Ask for a file name on `output` and read one whitespace-delimited word
/// from `input`.
pub fn prompt_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<PathBuf, SourceError> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|()| output.flush())
        .map_err(SourceError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(SourceError::Prompt)?;

    line.split_whitespace()
        .next()
        .map(PathBuf::from)
        .ok_or(SourceError::EmptyPath)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_reads_first_word() {
        let mut shown = Vec::new();
        let path = prompt_path(Cursor::new("  code.rb trailing\n"), &mut shown);
        assert_eq!(path.ok(), Some(PathBuf::from("code.rb")));
        assert_eq!(shown, PROMPT.as_bytes());
    }

    #[test]
    fn prompt_rejects_blank_line() {
        let result = prompt_path(Cursor::new("\n"), Vec::new());
        assert!(matches!(result, Err(SourceError::EmptyPath)));
    }

    #[test]
    fn prompt_rejects_closed_input() {
        let result = prompt_path(Cursor::new(""), Vec::new());
        assert!(matches!(result, Err(SourceError::EmptyPath)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_source(Path::new("/definitely/not/here.rb"));
        let Err(err) = err else {
            panic!("read of a missing file succeeded");
        };
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().starts_with("unable to open /definitely/not/here.rb"));
    }
}
