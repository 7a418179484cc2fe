use super::ast::*;

/// Renders a tree as fully parenthesized prefix notation, e.g. `(+ 1 (* 2 3))`.
pub struct Renderer;

impl Renderer {
    pub fn render(expr: &Expr) -> String {
        expr.accept(&mut Renderer)
    }
}

impl ExprVisitor for Renderer {
    type ExprResult = String;

    fn visit_literal_expr(&mut self, _expr: &Expr, value: u64) -> String {
        value.to_string()
    }

    fn visit_binary_expr(
        &mut self,
        _expr: &Expr,
        lhs: &Expr,
        op: BinaryOperator,
        rhs: &Expr,
    ) -> String {
        format!("({} {} {})", op, lhs.accept(self), rhs.accept(self))
    }
}

pub fn render(expr: &Expr) -> String {
    Renderer::render(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{self, Span};

    fn literal(value: u64) -> Expr {
        let source = source::text(&value.to_string());
        Expr::literal(value, Span::new(&source, 0, 1))
    }

    #[test]
    fn literal_renders_decimal() {
        assert_eq!(render(&literal(42)), "42");
    }

    #[test]
    fn nested_binary() {
        let tree = Expr::binary(
            literal(1),
            BinaryOperator::Minus,
            Expr::binary(literal(2), BinaryOperator::Divide, literal(3)),
        );
        assert_eq!(render(&tree), "(- 1 (/ 2 3))");
    }
}
