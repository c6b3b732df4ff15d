//! Classification of the literal on the right-hand side of a `let` line.
//!
//! The literal is the text formed by joining every word after `=` with single
//! spaces. Classification decides its shape and pre-parses numbers; expression
//! bodies are left untouched until the evaluator runs them against the buffer.

pub const ARRAY_OPEN: &str = "array(";
pub const ARRAY_CLOSE: char = ')';
pub const EXPRESSION_OPEN: &str = "${";
pub const EXPRESSION_CLOSE: char = '}';
pub const QUOTE: char = '\'';

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    /// Contents between the surrounding quotes
    Text(String),
    Array(Vec<f64>),
    /// Body between `${` and `}`, not yet evaluated
    Expression(String),
}

/// Parses a number the way a decimal float parser would, signs and all.
///
/// Single underscores between digits group them (`1_000`).
pub fn parse_number(word: &str) -> Option<f64> {
    if !word.contains('_') {
        return word.parse::<f64>().ok();
    }
    let bytes = word.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }
    word.replace('_', "").parse::<f64>().ok()
}

fn text_body(literal: &str) -> Option<&str> {
    if !literal.starts_with(QUOTE) || !literal.ends_with(QUOTE) {
        return None;
    }
    // A lone quote both opens and closes the literal
    Some(literal.get(1..literal.len() - 1).unwrap_or(""))
}

/// Elements of `array( ... )`, or `None` when the shape or any element is off.
///
/// The opening `array( ` and closing ` )` may share their space, which is how
/// `array(  )` collapses to the empty array once the words are re-joined.
fn array_items(literal: &str) -> Option<Vec<f64>> {
    let inner = literal.strip_prefix(ARRAY_OPEN)?.strip_suffix(ARRAY_CLOSE)?;
    if !inner.starts_with(' ') || !inner.ends_with(' ') {
        return None;
    }
    inner
        .split_whitespace()
        .map(|item| item.trim_matches(','))
        .filter(|item| !item.is_empty())
        .map(parse_number)
        .collect()
}

fn expression_body(literal: &str) -> Option<&str> {
    literal
        .strip_prefix(EXPRESSION_OPEN)?
        .strip_suffix(EXPRESSION_CLOSE)
}

/// Decides what kind of literal `literal` is, or `None` if it is not one.
pub fn classify(literal: &str) -> Option<Literal> {
    if let Some(body) = expression_body(literal) {
        return Some(Literal::Expression(body.to_string()));
    }
    if let Some(number) = parse_number(literal) {
        return Some(Literal::Number(number));
    }
    if let Some(text) = text_body(literal) {
        return Some(Literal::Text(text.to_string()));
    }
    array_items(literal).map(Literal::Array)
}

pub fn is_valid(literal: &str) -> bool {
    classify(literal).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(classify("1"), Some(Literal::Number(1.0)));
        assert_eq!(classify("-2.5"), Some(Literal::Number(-2.5)));
        assert_eq!(classify("+3"), Some(Literal::Number(3.0)));
        assert_eq!(classify(".5"), Some(Literal::Number(0.5)));
        assert_eq!(classify("1e3"), Some(Literal::Number(1000.0)));
        assert_eq!(classify("1 2"), None);
        assert_eq!(classify("1.2.3"), None);
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number("-1_000.000_5"), Some(-1000.0005));
        assert_eq!(parse_number("1_0e1_0"), Some(1e11));
        assert_eq!(parse_number("_1"), None);
        assert_eq!(parse_number("1_"), None);
        assert_eq!(parse_number("1__0"), None);
        assert_eq!(parse_number("1_.5"), None);
        assert_eq!(classify("array( 1_000, 2 )"), Some(Literal::Array(vec![1000.0, 2.0])));
    }

    #[test]
    fn test_text() {
        assert_eq!(classify("'hello'"), Some(Literal::Text("hello".into())));
        assert_eq!(classify("'hello world'"), Some(Literal::Text("hello world".into())));
        assert_eq!(classify("''"), Some(Literal::Text("".into())));
        assert_eq!(classify("'"), Some(Literal::Text("".into())));
        assert_eq!(classify("'it's'"), Some(Literal::Text("it's".into())));
        assert_eq!(classify("'open"), None);
        assert_eq!(classify("\"double\""), None);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            classify("array( 1, 2, 3 )"),
            Some(Literal::Array(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(classify("array( 1 2 3 )"), Some(Literal::Array(vec![1.0, 2.0, 3.0])));
        assert_eq!(classify("array( -1.5, 2, )"), Some(Literal::Array(vec![-1.5, 2.0])));
        assert_eq!(classify("array( )"), Some(Literal::Array(Vec::new())));
        assert_eq!(classify("array( 1, 'a' )"), None);
        assert_eq!(classify("array(1, 2 )"), None);
        assert_eq!(classify("array( 1, 2)"), None);
        assert_eq!(classify("array()"), None);
        assert_eq!(classify("list( 1 )"), None);
    }

    #[test]
    fn test_expressions_are_not_evaluated() {
        assert_eq!(classify("${a b +}"), Some(Literal::Expression("a b +".into())));
        assert_eq!(classify("${ a 1 + }"), Some(Literal::Expression(" a 1 + ".into())));
        assert_eq!(classify("${}"), Some(Literal::Expression("".into())));
        assert_eq!(classify("${unknown}"), Some(Literal::Expression("unknown".into())));
        assert_eq!(classify("${a"), None);
        assert_eq!(classify("$a}"), None);
    }

    #[test]
    fn test_bare_words_are_invalid() {
        assert!(!is_valid("a"));
        assert!(!is_valid("a +"));
        assert!(!is_valid(""));
        assert!(is_valid("'a'"));
    }
}
