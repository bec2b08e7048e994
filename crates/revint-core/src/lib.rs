//! Core of revint: digit reversal plus the location and error types shared
//! by the input lexer, parser and judge.
//!
//! Every error produced while reading input carries its source position.

mod reverse;

pub use reverse::{Digits, checked_reverse, fits_i32, reverse, reverse_wide};

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte span to line/column positions
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }
}

/// Value with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Errors raised while reading integer input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevintError {
    #[error("revint:{filename}:{line}:{column}: ERR_SYNTAX: {message}")]
    Syntax {
        message: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error(
        "revint:{filename}:{line}:{column}: ERR_LITERAL: {literal} does not fit in a signed 64-bit integer"
    )]
    Literal {
        literal: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error(
        "revint:{filename}:{line}:{column}: ERR_RANGE: {value} is outside the signed 32-bit range"
    )]
    Range {
        value: i64,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error(
        "revint:{filename}:{line}:{column}: ERR_ARITY: expected {expected} argument(s), found {found}"
    )]
    Arity {
        expected: usize,
        found: usize,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },
}

impl RevintError {
    #[must_use]
    pub fn syntax(message: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Syntax {
            message,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn literal(literal: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Literal {
            literal,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn range(value: i64, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Range {
            value,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn arity(
        expected: usize,
        found: usize,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::Arity {
            expected,
            found,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Syntax { span, .. }
            | Self::Literal { span, .. }
            | Self::Range { span, .. }
            | Self::Arity { span, .. } => *span,
        }
    }

    /// Stable error code, as printed in the message
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "ERR_SYNTAX",
            Self::Literal { .. } => "ERR_LITERAL",
            Self::Range { .. } => "ERR_RANGE",
            Self::Arity { .. } => "ERR_ARITY",
        }
    }
}
