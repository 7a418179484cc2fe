pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod session;
pub mod source;

use diagnostic::*;
use lexing::Lexer;
use log::{log_enabled, trace, Level};
use parsing::*;
pub use session::{Outcome, Session, SessionConfig};
pub use source::Source;

/// Lexes and parses a single line into a tree.
///
/// With `strict` set the expression must consume the whole line; otherwise
/// anything after a complete expression is ignored.
pub fn parse_line(source: Source, strict: bool) -> DiagnosticResult<Expr> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer)?;

    let expr = if strict {
        parser.parse_complete()?
    } else {
        parser.parse()?
    };

    if log_enabled!(target: "ast", Level::Trace) {
        let mut printer = ASTPrinter::collect();
        printer.print(&expr);
        trace!(target: "ast", "\n{}", printer.collected().join("\n"));
    }

    Ok(expr)
}

/// Renders `text` as fully parenthesized prefix notation.
pub fn render_line(text: &str) -> DiagnosticResult<String> {
    let expr = parse_line(source::text(text), false)?;
    Ok(render(&expr))
}
