use std::path::PathBuf;
use thiserror::Error;

/// Why the parser gave up on a line.
///
/// Columns are 1-based character positions within the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatViolation {
    /// A neighbor id was not directly followed by the delimiter.
    #[error("unexpected character {} at column {column}, expected delimiter {expected:?}", describe(.found))]
    UnexpectedCharacter {
        column: usize,
        expected: char,
        /// `None` when the line ended right after the id.
        found: Option<char>,
    },
    /// A numeric token was expected but something else was found.
    #[error("malformed numeric token {token:?} at column {column}")]
    MalformedToken { column: usize, token: String },
    /// The line ended right after a delimiter.
    #[error("missing weight at column {column}")]
    MissingWeight { column: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of line".to_string(),
    }
}

/// Reason a build stopped before the end of its input.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {violation}")]
    Format {
        line: usize,
        #[source]
        violation: FormatViolation,
    },
}

impl BuildError {
    /// 1-based line the build stopped at, if it got as far as reading.
    pub fn line(&self) -> Option<usize> {
        match self {
            BuildError::Open { .. } => None,
            BuildError::Read { line, .. } | BuildError::Format { line, .. } => Some(*line),
        }
    }

    pub fn violation(&self) -> Option<&FormatViolation> {
        match self {
            BuildError::Format { violation, .. } => Some(violation),
            _ => None,
        }
    }
}
