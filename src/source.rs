use std::rc::Rc;

pub struct SourceImpl {
    pub name: String,
    pub line: usize,
    pub content: Vec<char>,
}

pub type Source = Rc<SourceImpl>;

pub fn text(text: &str) -> Source {
    line("<text>", 1, text)
}

pub fn line(name: &str, line: usize, text: &str) -> Source {
    Rc::new(SourceImpl {
        name: String::from(name),
        line,
        content: text.chars().collect(),
    })
}

impl SourceImpl {
    pub fn character(&self, index: usize) -> Option<char> {
        self.content.get(index).copied()
    }

    pub fn length(&self) -> usize {
        self.content.len()
    }

    pub fn lexeme(&self, index: usize, length: usize) -> String {
        let start = index.min(self.length());
        let end = (index + length).min(self.length());
        self.content[start..end].iter().collect()
    }

    pub fn text(&self) -> String {
        self.content.iter().collect()
    }
}

#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize) -> Self {
        Span {
            source: Rc::clone(source),
            index,
            length,
        }
    }

    pub fn join<T: ContainsSpan, U: ContainsSpan>(start: &T, end: &U) -> Self {
        let start = start.span();
        let end = end.span();
        Span::new(
            &start.source,
            start.index,
            end.index + end.length - start.index,
        )
    }

    pub fn lexeme(&self) -> String {
        self.source.lexeme(self.index, self.length)
    }

    pub fn entire_line(&self) -> (String, usize) {
        (self.source.text(), self.index)
    }

    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.source.name, self.source.line, self.index + 1)
    }
}

impl std::fmt::Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Span({}, len {})", self.location(), self.length)
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Span) -> bool {
        self.index == other.index && self.length == other.length
    }
}

pub trait ContainsSpan {
    fn span(&self) -> &Span;
}

impl ContainsSpan for Span {
    fn span(&self) -> &Span {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexeme_is_char_based() {
        let source = text("é + 12");
        assert_eq!(source.lexeme(4, 2), "12");
        assert_eq!(source.lexeme(0, 1), "é");
    }

    #[test]
    fn lexeme_clamps_past_end() {
        let source = text("7");
        assert_eq!(source.lexeme(1, 0), "");
        assert_eq!(source.lexeme(0, 5), "7");
    }

    #[test]
    fn join_covers_both_spans() {
        let source = line("<stdin>", 3, "10 + 200");
        let lhs = Span::new(&source, 0, 2);
        let rhs = Span::new(&source, 5, 3);
        let joined = Span::join(&lhs, &rhs);
        assert_eq!(joined.lexeme(), "10 + 200");
        assert_eq!(joined.location(), "<stdin>:3:1");
    }
}
