use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated {kind} opened on line {line}")]
    UnterminatedSpan { kind: SpanKind, line: usize },

    #[error("unterminated code block opened on line {line}")]
    UnterminatedCodeBlock { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Emphasis,
    Strikethrough,
    InlineCode,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::Emphasis => write!(f, "emphasis"),
            SpanKind::Strikethrough => write!(f, "strikethrough"),
            SpanKind::InlineCode => write!(f, "inline code"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read stylesheet {}: {source}", path.display())]
    StyleSheet { path: PathBuf, source: io::Error },

    #[error("malformed input: {}", join_errors(.0))]
    Malformed(Vec<ParseError>),
}

fn join_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
