//! Logos-based lexer for name identifiers
//!
//! Identifiers are short, so the lexer only classifies the characters the
//! grammar treats structurally. Everything else is `Text`.

use logos::Logos;
use std::ops::Range;

/// A token with its kind, text, and byte span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Structural classification of identifier text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Backtick,
    Arrow,
    Minus,
    Text,
    Error,
}

impl TokenKind {
    pub fn is_open(self) -> bool {
        matches!(self, Self::LBracket | Self::LParen | Self::LBrace)
    }

    pub fn is_close(self) -> bool {
        matches!(self, Self::RBracket | Self::RParen | Self::RBrace)
    }

    /// The closer matching an opener, `None` for anything else.
    pub fn closer(self) -> Option<TokenKind> {
        match self {
            Self::LBracket => Some(Self::RBracket),
            Self::LParen => Some(Self::RParen),
            Self::LBrace => Some(Self::RBrace),
            _ => None,
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, span })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    #[token("->")]
    Arrow,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    #[token("`")]
    Backtick,

    #[token("-")]
    Minus,

    #[regex(r"[^\[\](){},;:.`\s-]+")]
    Text,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Arrow => TokenKind::Arrow,
            LogosToken::LBracket => TokenKind::LBracket,
            LogosToken::RBracket => TokenKind::RBracket,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::LBrace => TokenKind::LBrace,
            LogosToken::RBrace => TokenKind::RBrace,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Backtick => TokenKind::Backtick,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::Text => TokenKind::Text,
        }
    }
}
