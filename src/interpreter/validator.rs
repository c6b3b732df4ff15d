use crate::ast::{LetStmt, Line, ASSIGN, COMMENT_CLOSE, COMMENT_OPEN, DIRECTIVE, LET};
use crate::lexer::{tokenize, Word};
use crate::literal::classify;

/// Variable names are made of letters only
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphabetic)
}

/// Decides what a tokenized line is, or `None` if it fits no statement form.
///
/// This is purely syntactic: an expression literal is accepted here even if
/// it will fail once evaluated.
pub fn classify_line<'a>(words: &[Word<'a>]) -> Option<Line<'a>> {
    let Some((first, _)) = words.first() else {
        return Some(Line::Blank);
    };

    match *first {
        DIRECTIVE => Some(Line::Directive),
        COMMENT_OPEN => Some(Line::CommentOpen),
        COMMENT_CLOSE => Some(Line::CommentClose),
        LET => classify_let(words).map(Line::Let),
        _ => None,
    }
}

fn classify_let<'a>(words: &[Word<'a>]) -> Option<LetStmt<'a>> {
    let [_, (name, _), (assign, _), rest @ ..] = words else {
        return None;
    };
    let (first_literal, last_literal) = (rest.first()?, rest.last()?);
    if *assign != ASSIGN || !is_valid_name(name) {
        return None;
    }

    let source = rest
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join(" ");
    let literal = classify(&source)?;

    Some(LetStmt {
        name: *name,
        literal,
        source,
        literal_span: first_literal.1.merge(last_literal.1),
    })
}

/// Checks a single raw line without touching any parser state.
pub fn is_valid_line(line: &str) -> bool {
    classify_line(&tokenize(line)).is_some()
}
