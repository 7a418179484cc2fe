use crate::lexing::{Token, TokenKind};
use crate::source::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Minus => Some(BinaryOperator::Minus),
            TokenKind::Multiply => Some(BinaryOperator::Multiply),
            TokenKind::Divide => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug)]
pub enum ExprKind {
    Literal(u64),
    Binary(Box<Expr>, BinaryOperator, Box<Expr>),
}

#[derive(Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Height of the tree rooted here; a literal is 1.
    pub depth: usize,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        let depth = match &kind {
            ExprKind::Literal(_) => 1,
            ExprKind::Binary(lhs, _, rhs) => 1 + lhs.depth.max(rhs.depth),
        };
        Expr { kind, span, depth }
    }

    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::ExprResult {
        match &self.kind {
            ExprKind::Literal(value) => visitor.visit_literal_expr(&self, *value),
            ExprKind::Binary(lhs, op, rhs) => visitor.visit_binary_expr(&self, &lhs, *op, &rhs),
        }
    }

    pub fn literal(value: u64, span: Span) -> Self {
        Expr::new(ExprKind::Literal(value), span)
    }

    /// Builds a literal from an `Integer` token; `None` for any other kind.
    pub fn literal_token(token: &Token) -> Option<Self> {
        token
            .value
            .map(|value| Expr::literal(value, token.span.clone()))
    }

    pub fn binary(lhs: Expr, operator: BinaryOperator, rhs: Expr) -> Self {
        let span = Span::join(&lhs, &rhs);
        Expr::new(
            ExprKind::Binary(Box::new(lhs), operator, Box::new(rhs)),
            span,
        )
    }

    /// Widens the span to cover the parentheses around this expression.
    pub fn grouped<T: ContainsSpan, U: ContainsSpan>(self, open: &T, close: &U) -> Self {
        Expr {
            span: Span::join(open, close),
            ..self
        }
    }
}

impl ContainsSpan for Expr {
    fn span(&self) -> &Span {
        &self.span
    }
}

pub trait ExprVisitor {
    type ExprResult;

    fn visit_literal_expr(&mut self, expr: &Expr, value: u64) -> Self::ExprResult;
    fn visit_binary_expr(
        &mut self,
        expr: &Expr,
        lhs: &Expr,
        op: BinaryOperator,
        rhs: &Expr,
    ) -> Self::ExprResult;
}
