use crate::lexing::TokenKind;
use crate::source::*;
use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    UnknownCharacter(char),
    IntegerTooLarge,
    TooDeeplyNested {
        limit: usize,
    },
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

pub type DiagnosticResult<T> = Result<T, Diagnostic>;

impl Diagnostic {
    pub fn new<T: ContainsSpan>(kind: DiagnosticKind, span: &T) -> Self {
        Diagnostic {
            kind,
            span: span.span().clone(),
        }
    }

    pub fn unknown_character<T: ContainsSpan>(character: char, span: &T) -> Self {
        Diagnostic::new(DiagnosticKind::UnknownCharacter(character), span)
    }

    pub fn unexpected_token<T: ContainsSpan>(
        expected: TokenKind,
        found: TokenKind,
        span: &T,
    ) -> Self {
        Diagnostic::new(DiagnosticKind::UnexpectedToken { expected, found }, span)
    }

    pub fn is_lex_error(&self) -> bool {
        match self.kind {
            DiagnosticKind::UnknownCharacter(_) | DiagnosticKind::IntegerTooLarge => true,
            DiagnosticKind::UnexpectedToken { .. } | DiagnosticKind::TooDeeplyNested { .. } => {
                false
            }
        }
    }

    /// The one-line message shown to the user, e.g. `Unknown character @`.
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::UnknownCharacter(character) => {
                format!("Unknown character {}", character)
            }
            DiagnosticKind::IntegerTooLarge => String::from("Integer literal too large"),
            DiagnosticKind::TooDeeplyNested { .. } => String::from("Expression too deeply nested"),
            DiagnosticKind::UnexpectedToken { .. } => String::from("Syntax error"),
        }
    }

    pub fn note(&self) -> Option<String> {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { expected, found } => {
                Some(format!("expected {}, found {}", expected, found))
            }
            DiagnosticKind::IntegerTooLarge => {
                Some(format!("value must be at most {}", u64::MAX))
            }
            DiagnosticKind::TooDeeplyNested { limit } => {
                Some(format!("expressions may nest at most {} levels", limit))
            }
            DiagnosticKind::UnknownCharacter(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.span.location())
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = if diagnostic.is_lex_error() {
            "• Lex error:".red().bold()
        } else {
            "• Syntax error:".red().bold()
        };
        println!("\n{} {}\n", header, diagnostic.message());
        let (line, offset) = diagnostic.span.entire_line();
        println!("  {}", line);

        let offset = (0..offset).map(|_| " ").collect::<String>();
        let underline = (0..diagnostic.span.length.max(1))
            .map(|_| "^")
            .collect::<String>();
        println!("  {}{}", offset, underline.yellow());
        if let Some(note) = diagnostic.note() {
            println!("  {} {}", "note:".blue().bold(), note);
        }
        println!("  {}\n", diagnostic.span.location());
    }
}

/// Prints only the one-line message, e.g. `Syntax error`.
pub struct PlainReporter {}

impl PlainReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(PlainReporter {})
    }
}

impl Reporter for PlainReporter {
    fn report(&self, diagnostic: Diagnostic) {
        println!("{}", diagnostic.message());
    }
}
