//! Lexical analysis for revint test-case input
//!
//! Tokenizes integer argument text (one per line, comma separated or a
//! bracketed list) using logos.

use logos::Logos;
use revint_core::Span;

/// Input tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal with optional sign
    #[regex(r"[+-]?[0-9]+")]
    Integer,

    /// Argument separator (,)
    #[token(",")]
    Comma,

    /// List start ([)
    #[token("[")]
    LeftBracket,

    /// List end (])
    #[token("]")]
    RightBracket,

    /// Newline, also separates arguments
    #[regex(r"\r?\n")]
    Newline,

    /// Whitespace (ignored)
    #[regex(r"[ \t\f]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        let token = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Error,
            None => {
                return SpannedToken {
                    token: Token::Eof,
                    span: Span::new(self.input.len(), self.input.len()),
                    text: String::new(),
                };
            }
        };

        let span = self.lexer.span();
        SpannedToken {
            token,
            span: Span::new(span.start, span.end),
            text: self.input[span].to_string(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
