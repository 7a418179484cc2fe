use super::ast::*;

/// Dumps a tree one node per line, children indented under their parent.
pub struct ASTPrinter {
    indent: i32,
    lines: Vec<String>,
}

impl ASTPrinter {
    pub fn collect() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            lines: Vec::new(),
        }
    }

    pub fn print(&mut self, expr: &Expr) {
        expr.accept(self)
    }

    pub fn collected(&self) -> &[String] {
        &self.lines
    }

    fn write_ln(&mut self, token: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        self.lines.push(format!("{}{}", indent, token));
    }

    fn indent<T>(&mut self, block: T)
    where
        T: Fn(&mut ASTPrinter) -> (),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }
}

impl ExprVisitor for ASTPrinter {
    type ExprResult = ();

    fn visit_literal_expr(&mut self, _expr: &Expr, value: u64) {
        self.write_ln(&format!("Literal({})", value))
    }

    fn visit_binary_expr(&mut self, _expr: &Expr, lhs: &Expr, op: BinaryOperator, rhs: &Expr) {
        self.write_ln(&format!("Binary({})", op));
        self.indent(|visitor| {
            lhs.accept(visitor);
            rhs.accept(visitor);
        })
    }
}
