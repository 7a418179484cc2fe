mod ast;
mod ast_printer;
mod parser;
mod renderer;

pub use ast::{BinaryOperator, Expr, ExprKind, ExprVisitor};
pub use ast_printer::ASTPrinter;
pub use parser::{Parser, MAX_DEPTH};
pub use renderer::{render, Renderer};
