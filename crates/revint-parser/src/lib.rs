//! Argument parser for revint test-case input
//!
//! Accepts one integer per line, comma separated integers, or a single
//! level of bracketed list, mirroring how practice-problem inputs are
//! written. Lists do not nest.

use revint_core::{RevintError, SourceMap, Span, Spanned, fits_i32};
use revint_lexer::{Lexer, SpannedToken, Token};

/// How literals outside the 32-bit range are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Any value that fits a signed 64-bit integer is accepted
    #[default]
    Lenient,
    /// Values outside the signed 32-bit range are rejected with `ERR_RANGE`
    Strict,
}

/// Parsed integer arguments with their locations
#[derive(Debug, Clone)]
pub struct Arguments {
    values: Vec<Spanned<i64>>,
    source_map: SourceMap,
    filename: String,
    input_span: Span,
}

impl Arguments {
    #[must_use]
    pub fn values(&self) -> &[Spanned<i64>] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The only argument
    ///
    /// # Errors
    ///
    /// Returns `ERR_ARITY` unless exactly one argument was parsed
    pub fn single(&self) -> Result<i64, RevintError> {
        match self.values.as_slice() {
            [value] => Ok(value.node),
            [] => Err(RevintError::arity(
                1,
                0,
                self.input_span,
                &self.source_map,
                &self.filename,
            )),
            [_, surplus, ..] => Err(RevintError::arity(
                1,
                self.values.len(),
                surplus.span,
                &self.source_map,
                &self.filename,
            )),
        }
    }

    /// Iterate over the plain values
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().map(|value| value.node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Value,
    Separator,
}

pub struct Parser {
    input_len: usize,
    source_map: SourceMap,
    filename: String,
    tokens: Vec<SpannedToken>,
    mode: ParseMode,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// # Errors
    ///
    /// Returns `RevintError` if there are lexical errors in the input
    pub fn new(input: &str) -> Result<Self, RevintError> {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a new parser for the given input with a filename
    ///
    /// # Errors
    ///
    /// Returns `RevintError` if there are lexical errors in the input
    pub fn new_with_filename(input: &str, filename: &str) -> Result<Self, RevintError> {
        let source_map = SourceMap::new(input);

        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();

        for token in &tokens {
            if token.token == Token::Error {
                return Err(RevintError::syntax(
                    format!("Unexpected character: {}", token.text),
                    token.span,
                    &source_map,
                    filename,
                ));
            }
        }

        Ok(Self {
            input_len: input.len(),
            source_map,
            filename: filename.to_string(),
            tokens,
            mode: ParseMode::default(),
        })
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse the input into integer arguments
    ///
    /// # Errors
    ///
    /// Returns `RevintError` on misplaced separators or brackets, on literals
    /// that overflow 64 bits, and in strict mode on values outside 32 bits
    pub fn parse(&self) -> Result<Arguments, RevintError> {
        let mut values = Vec::new();
        let mut expect = Expect::Value;
        let mut pending_comma: Option<Span> = None;
        let mut open_bracket: Option<Span> = None;

        for token in &self.tokens {
            match token.token {
                Token::Integer => {
                    if expect == Expect::Separator {
                        return Err(self.syntax(
                            format!("expected ',' or newline before {}", token.text),
                            token.span,
                        ));
                    }
                    values.push(Spanned::new(self.literal(token)?, token.span));
                    expect = Expect::Separator;
                    pending_comma = None;
                }
                Token::Comma => {
                    if expect == Expect::Value {
                        return Err(self.syntax("expected integer before ','", token.span));
                    }
                    expect = Expect::Value;
                    pending_comma = Some(token.span);
                }
                Token::Newline => {
                    // a newline right after a comma just continues the list
                    if pending_comma.is_none() {
                        expect = Expect::Value;
                    }
                }
                Token::LeftBracket => {
                    if open_bracket.is_some() {
                        return Err(self.syntax("nested lists are not supported", token.span));
                    }
                    if expect == Expect::Separator {
                        return Err(self.syntax("expected ',' or newline before '['", token.span));
                    }
                    open_bracket = Some(token.span);
                    pending_comma = None;
                }
                Token::RightBracket => {
                    if open_bracket.is_none() {
                        return Err(self.syntax("unmatched ']'", token.span));
                    }
                    if pending_comma.is_some() {
                        return Err(self.syntax("expected integer before ']'", token.span));
                    }
                    open_bracket = None;
                    expect = Expect::Separator;
                }
                Token::Eof => {
                    if let Some(span) = open_bracket {
                        return Err(self.syntax("unclosed '['", span));
                    }
                    if let Some(span) = pending_comma {
                        return Err(self.syntax("expected integer after ','", span));
                    }
                }
                Token::Whitespace | Token::Error => {
                    return Err(self.syntax(
                        format!("Unexpected character: {}", token.text),
                        token.span,
                    ));
                }
            }
        }

        Ok(Arguments {
            values,
            source_map: self.source_map.clone(),
            filename: self.filename.clone(),
            input_span: Span::new(0, self.input_len),
        })
    }

    fn literal(&self, token: &SpannedToken) -> Result<i64, RevintError> {
        let value: i64 = token.text.parse().map_err(|_| {
            RevintError::literal(
                token.text.clone(),
                token.span,
                &self.source_map,
                &self.filename,
            )
        })?;

        if self.mode == ParseMode::Strict && !fits_i32(value) {
            return Err(RevintError::range(
                value,
                token.span,
                &self.source_map,
                &self.filename,
            ));
        }
        Ok(value)
    }

    fn syntax(&self, message: impl Into<String>, span: Span) -> RevintError {
        RevintError::syntax(message.into(), span, &self.source_map, &self.filename)
    }
}
