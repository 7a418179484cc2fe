use super::ast::*;
use crate::diagnostic::*;
use crate::lexing::*;
use crate::source::ContainsSpan;
use log::trace;

type Result<T> = DiagnosticResult<T>;

/// Deepest tree (or parenthesis nesting) a line may produce. Rendering and
/// dropping a tree recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent parser with a single token of lookahead.
///
/// ```text
/// expr   := term ( (PLUS | MINUS) term )*
/// term   := factor ( (MUL | DIV) factor )*
/// factor := INTEGER | LPAREN expr RPAREN
/// ```
pub struct Parser {
    lexer: Lexer,
    current: Token,
    nesting: usize,
}

impl Parser {
    /// Pulls the first token immediately, so an invalid first character
    /// fails here rather than in `parse`.
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            nesting: 0,
        })
    }

    /// Parses one expression. Tokens left over after it are not inspected.
    pub fn parse(&mut self) -> Result<Expr> {
        self.expr()
    }

    /// Like `parse`, but the expression must be followed by end of input.
    pub fn parse_complete(&mut self) -> Result<Expr> {
        let expr = self.expr()?;
        self.eat(TokenKind::EndOfInput)?;
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;
        while let TokenKind::Plus | TokenKind::Minus = self.peek() {
            let operator = self.operator()?;
            let rhs = self.term()?;
            lhs = self.binary(lhs, operator, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.factor()?;
        while let TokenKind::Multiply | TokenKind::Divide = self.peek() {
            let operator = self.operator()?;
            let rhs = self.factor()?;
            lhs = self.binary(lhs, operator, rhs)?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr> {
        if self.peek() == TokenKind::LeftParen {
            let open = self.eat(TokenKind::LeftParen)?;
            if self.nesting >= MAX_DEPTH {
                return Err(too_deep(&open));
            }
            self.nesting += 1;
            let expr = self.expr();
            self.nesting -= 1;
            let expr = expr?;
            let close = self.eat(TokenKind::RightParen)?;
            Ok(expr.grouped(&open, &close))
        } else {
            let token = self.eat(TokenKind::Integer)?;
            // An Integer token always carries its value
            Expr::literal_token(&token).ok_or_else(|| {
                Diagnostic::unexpected_token(TokenKind::Integer, token.kind, &token)
            })
        }
    }

    fn binary(&self, lhs: Expr, operator: BinaryOperator, rhs: Expr) -> Result<Expr> {
        let expr = Expr::binary(lhs, operator, rhs);
        if expr.depth > MAX_DEPTH {
            Err(too_deep(&expr))
        } else {
            Ok(expr)
        }
    }

    fn operator(&mut self) -> Result<BinaryOperator> {
        let token = self.eat(self.peek())?;
        BinaryOperator::from_kind(token.kind).ok_or_else(|| {
            Diagnostic::unexpected_token(TokenKind::Plus, token.kind, &token)
        })
    }

    /// Consumes the lookahead if it is `kind` and pulls the next token.
    /// Every advance through the token stream goes through here.
    fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind != kind {
            trace!(target: "parser", "expected {}, found {}", kind, self.current);
            return Err(Diagnostic::unexpected_token(
                kind,
                self.current.kind,
                &self.current,
            ));
        }

        let next = self.lexer.next_token()?;
        let eaten = std::mem::replace(&mut self.current, next);
        trace!(target: "parser", "ate {}", eaten);
        Ok(eaten)
    }

    fn peek(&self) -> TokenKind {
        self.current.kind
    }
}

fn too_deep<T: ContainsSpan>(span: &T) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::TooDeeplyNested { limit: MAX_DEPTH }, span)
}
