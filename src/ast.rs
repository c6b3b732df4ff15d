use crate::diagnostic::Span;
use crate::literal::Literal;

pub const LET: &str = "let";
pub const ASSIGN: &str = "=";
pub const DIRECTIVE: &str = "::";
pub const COMMENT_OPEN: &str = "/+";
pub const COMMENT_CLOSE: &str = "+/";

/// The shape of one source line, decided from its first word
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    Directive,
    CommentOpen,
    CommentClose,
    Let(LetStmt<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt<'a> {
    pub name: &'a str,
    pub literal: Literal,
    /// The words after `=` joined with single spaces
    pub source: String,
    /// Covers the words after `=`, relative to the start of the line
    pub literal_span: Span,
}
