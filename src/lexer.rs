use chumsky::prelude::*;

use crate::diagnostic::Span;

/// A whitespace-delimited word borrowed from its line, with its byte span
pub type Word<'a> = (&'a str, Span);

/// Splits text into whitespace-delimited words.
///
/// Any Unicode whitespace separates words, so trailing `\n`/`\r\n` left over
/// from reading a file line by line simply disappears.
pub fn lexer<'a>() -> impl Parser<'a, &'a str, Vec<(&'a str, SimpleSpan)>, extra::Err<Simple<'a, char>>>
{
    let word = any()
        .filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .to_slice()
        .map_with(|word, e| (word, e.span()));

    word.padded()
        .repeated()
        .collect()
        .padded()
        .then_ignore(end())
}

pub fn tokenize(text: &str) -> Vec<Word<'_>> {
    // Every non-whitespace run is a word, so the lexer cannot reject input.
    lexer()
        .parse(text)
        .into_output()
        .unwrap_or_default()
        .into_iter()
        .map(|(word, span)| (word, Span::from(span)))
        .collect()
}
