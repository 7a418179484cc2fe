use super::token::*;
use crate::diagnostic::*;
use crate::source::*;
use log::trace;

pub struct Lexer {
    source: Source,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Lexer {
            source,
            start: 0,
            current: 0,
        }
    }

    /// Produces the next token. Once the line is exhausted every call returns
    /// `EndOfInput`.
    pub fn next_token(&mut self) -> DiagnosticResult<Token> {
        while self.peek() == Some(' ') {
            self.advance();
        }

        self.start = self.current;
        let token = self.token()?;
        trace!(target: "lexer", "{}", token);
        Ok(token)
    }

    /// Drains the line into a token list ending with a single `EndOfInput`.
    pub fn lex(mut self) -> DiagnosticResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    fn token(&mut self) -> DiagnosticResult<Token> {
        let character = match self.advance() {
            Some(character) => character,
            None => return Ok(self.make_token(TokenKind::EndOfInput)),
        };
        match character {
            '+' => Ok(self.make_token(TokenKind::Plus)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '*' => Ok(self.make_token(TokenKind::Multiply)),
            '/' => Ok(self.make_token(TokenKind::Divide)),
            '(' => Ok(self.make_token(TokenKind::LeftParen)),
            ')' => Ok(self.make_token(TokenKind::RightParen)),
            '0'..='9' => self.integer(),
            _ => Err(Diagnostic::unknown_character(
                character,
                &self.current_span(),
            )),
        }
    }

    fn integer(&mut self) -> DiagnosticResult<Token> {
        while let Some('0'..='9') = self.peek() {
            self.advance();
        }

        let span = self.current_span();
        match span.lexeme().parse::<u64>() {
            Ok(value) => Ok(Token::integer(value, span)),
            Err(_) => Err(Diagnostic::new(DiagnosticKind::IntegerTooLarge, &span)),
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span())
    }

    fn current_span(&self) -> Span {
        Span::new(&self.source, self.start, self.current - self.start)
    }

    fn advance(&mut self) -> Option<char> {
        let character = self.peek();
        if character.is_some() {
            self.current += 1;
        }
        character
    }

    fn peek(&self) -> Option<char> {
        self.source.character(self.current)
    }
}
