use crate::source::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Integer,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,

    // Grouping
    LeftParen,
    RightParen,

    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "integer",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Multiply => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Only set for `TokenKind::Integer`.
    pub value: Option<u64>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            value: None,
        }
    }

    pub fn integer(value: u64, span: Span) -> Self {
        Token {
            kind: TokenKind::Integer,
            span,
            value: Some(value),
        }
    }

    pub fn lexeme(&self) -> String {
        self.span.lexeme()
    }
}

impl ContainsSpan for Token {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:#?}, lexeme: {})",
            self.kind,
            self.lexeme()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}
