pub use gocalc::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_source {

    use gocalc::source::{self, Source};

    pub fn new() -> Source {
        source::text("")
    }

    pub fn new_text(text: &str) -> Source {
        source::text(text)
    }
}

#[allow(dead_code)]
pub mod test_span {

    use super::test_source;
    use gocalc::source::*;

    pub fn new(index: usize, length: usize) -> Span {
        Span::new(&test_source::new(), index, length)
    }
}

#[allow(dead_code)]
pub mod test_token {

    use super::test_source;
    use gocalc::lexing::*;
    use gocalc::source::Span;

    pub fn test(kind: TokenKind, text: &str) -> Token {
        let span = Span::new(&test_source::new_text(text), 0, text.chars().count());
        if kind == TokenKind::Integer {
            Token::integer(text.parse().unwrap(), span)
        } else {
            Token::new(kind, span)
        }
    }

    pub fn integer(value: u64) -> Token {
        test(TokenKind::Integer, &value.to_string())
    }

    pub fn plus() -> Token {
        test(TokenKind::Plus, "+")
    }

    pub fn minus() -> Token {
        test(TokenKind::Minus, "-")
    }

    pub fn star() -> Token {
        test(TokenKind::Multiply, "*")
    }

    pub fn slash() -> Token {
        test(TokenKind::Divide, "/")
    }

    pub fn left_paren() -> Token {
        test(TokenKind::LeftParen, "(")
    }

    pub fn right_paren() -> Token {
        test(TokenKind::RightParen, ")")
    }

    pub fn end() -> Token {
        test(TokenKind::EndOfInput, "")
    }
}

#[allow(dead_code)]
pub mod test_ast {

    use gocalc::parsing::*;
    use gocalc::source::Span;

    pub fn literal(value: u64) -> Expr {
        Expr::literal(value, super::test_span::new(0, 0))
    }

    pub fn binary(lhs: Expr, op: BinaryOperator, rhs: Expr) -> Expr {
        let span: Span = super::test_span::new(0, 0);
        Expr::new(ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)), span)
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

#[allow(dead_code)]
impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.len(),
            kind,
            got.len(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
