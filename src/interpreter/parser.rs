use super::environment::Buffer;
use super::error::{EvaluationError, ParseError};
use super::evaluator::materialize;
use super::validator::classify_line;
use crate::ast::{LetStmt, Line, COMMENT_CLOSE, COMMENT_OPEN, DIRECTIVE};
use crate::diagnostic::Span;
use crate::lexer::tokenize;
use crate::literal::EXPRESSION_OPEN;
use crate::source::split_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Normal,
    /// Inside a `/+` block opened on `line`
    InComment { line: usize, span: Span },
}

/// Drives the line-by-line parse and owns the buffer it fills.
///
/// Each parser is used for exactly one run: `parse` consumes it and either
/// hands back the complete buffer or the first error.
pub struct Parser<'s> {
    lines: Vec<&'s str>,
    buffer: Buffer,
    state: CommentState,
}

impl<'s> Parser<'s> {
    pub fn new<S: AsRef<str>>(lines: &'s [S]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.as_ref()).collect(),
            buffer: Buffer::new(),
            state: CommentState::Normal,
        }
    }

    /// Parser over a whole document, split into lines that keep their terminators.
    pub fn from_source(source: &'s str) -> Self {
        Self {
            lines: split_lines(source),
            buffer: Buffer::new(),
            state: CommentState::Normal,
        }
    }

    pub fn parse(mut self) -> Result<Buffer, ParseError> {
        let lines = std::mem::take(&mut self.lines);
        let mut offset = 0;

        for (index, raw) in lines.iter().enumerate() {
            self.process_line(index + 1, raw, offset)?;
            // Lines handed over without a terminator still stand for one
            offset += raw.len() + usize::from(!raw.ends_with('\n'));
        }

        if let CommentState::InComment { line, span } = self.state {
            return Err(ParseError::unterminated_comment(line, span));
        }
        Ok(self.buffer)
    }

    fn process_line(&mut self, line_num: usize, raw: &str, offset: usize) -> Result<(), ParseError> {
        let words = tokenize(raw);
        let (Some((first, first_span)), Some((_, last_span))) = (words.first(), words.last()) else {
            return Ok(());
        };

        // Control markers are handled before the comment check, so `::` lines
        // are inert inside a comment block as well.
        match *first {
            COMMENT_OPEN => {
                if self.state == CommentState::Normal {
                    self.state = CommentState::InComment {
                        line: line_num,
                        span: first_span.shift(offset),
                    };
                }
                return Ok(());
            }
            COMMENT_CLOSE => {
                self.state = CommentState::Normal;
                return Ok(());
            }
            DIRECTIVE => return Ok(()),
            _ => {}
        }

        if self.state != CommentState::Normal {
            return Ok(());
        }

        match classify_line(&words) {
            Some(Line::Let(stmt)) => self.bind(line_num, raw, offset, stmt),
            Some(_) => Ok(()),
            None => Err(ParseError::invalid_line(
                line_num,
                raw.trim_end_matches(['\r', '\n']),
                first_span.merge(*last_span).shift(offset),
            )),
        }
    }

    fn bind(&mut self, line_num: usize, raw: &str, offset: usize, stmt: LetStmt<'_>) -> Result<(), ParseError> {
        let LetStmt {
            name,
            literal,
            source,
            literal_span,
        } = stmt;

        let value = materialize(literal, &mut self.buffer).map_err(|error| {
            let span = error_span(&error, raw, &source, literal_span);
            ParseError::evaluation(line_num, error, span.shift(offset))
        })?;
        self.buffer.set(name, value);
        Ok(())
    }
}

/// Where an evaluation error points within its line.
///
/// Token spans are relative to the expression body, so they can only be moved
/// onto the line when the literal was written with single spaces; otherwise
/// the whole literal is blamed.
fn error_span(error: &EvaluationError, raw: &str, source: &str, literal_span: Span) -> Span {
    let verbatim = raw.get(literal_span.start..literal_span.end) == Some(source);
    match error.span() {
        Some(span) if verbatim => span.shift(literal_span.start + EXPRESSION_OPEN.len()),
        _ => literal_span,
    }
}

pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Buffer, ParseError> {
    Parser::new(lines).parse()
}

pub fn parse_source(source: &str) -> Result<Buffer, ParseError> {
    Parser::from_source(source).parse()
}
