use crate::diagnostic::*;
use crate::parsing::*;
use crate::source;
use log::debug;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub const DEFAULT_PROMPT: &str = "goCalc> ";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub prompt: String,
    /// Stop at the first lex or syntax error instead of prompting again.
    pub fatal: bool,
    /// Reject tokens left over after a complete expression.
    pub strict: bool,
    /// Follow each rendering with an indented dump of the tree.
    pub tree: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: String::from(DEFAULT_PROMPT),
            fatal: false,
            strict: false,
            tree: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Input ran out.
    Finished,
    /// A line failed while running with `fatal` set.
    Aborted,
}

/// The read-render-print loop. Each line gets its own lexer, parser and tree.
pub struct Session {
    config: SessionConfig,
    reporter: Rc<dyn Reporter>,
}

impl Session {
    pub fn new(config: SessionConfig, reporter: Rc<dyn Reporter>) -> Self {
        Session { config, reporter }
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> io::Result<Outcome> {
        let mut line_number = 0;

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let text = match read_line(&mut input)? {
                Some(text) => text,
                None => {
                    debug!("end of input after {} lines", line_number);
                    return Ok(Outcome::Finished);
                }
            };
            line_number += 1;
            debug!("line {}: {:?}", line_number, text);

            if text.chars().all(|c| c == ' ') {
                continue;
            }

            let source = source::line("<stdin>", line_number, &text);
            match crate::parse_line(source, self.config.strict) {
                Ok(expr) => self.write_expr(&expr, output)?,
                Err(diagnostic) => {
                    debug!("line {} failed: {}", line_number, diagnostic);
                    self.reporter.report(diagnostic);
                    if self.config.fatal {
                        return Ok(Outcome::Aborted);
                    }
                }
            }
        }
    }

    fn write_expr<W: Write>(&self, expr: &Expr, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", render(expr))?;
        if self.config.tree {
            let mut printer = ASTPrinter::collect();
            printer.print(expr);
            for line in printer.collected() {
                writeln!(output, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Reads one line without its terminator. Bytes that are not UTF-8 become
/// U+FFFD, which the lexer then reports as an unknown character.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
