//! End-to-end parsing scenarios

mod common;

use common::{array, number, parse, text, INVALID_LINES, VALID_LINES};
use kate::interpreter::{parse_lines, parse_source};
use kate::Value;

#[test]
fn test_valid_document() {
    let buffer = parse(&VALID_LINES);

    assert_eq!(buffer.len(), 3);
    assert_eq!(number(&buffer, "a"), 1.0);
    assert_eq!(text(&buffer, "b"), "hello");
    assert_eq!(array(&buffer, "c"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_dangling_operator_is_a_syntax_error() {
    let err = parse_lines(&INVALID_LINES).unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.line(), 4);
    assert_eq!(err.to_string(), "Syntax error on line 4: let d = a +");
}

#[test]
fn test_redeclaration_last_write_wins() {
    let buffer = parse(&["let a = 1", "let b = 5", "let a = 2"]);
    assert_eq!(number(&buffer, "a"), 2.0);
    assert_eq!(buffer.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_redeclaration_can_change_type() {
    let buffer = parse(&["let a = 1", "let a = 'one'"]);
    assert_eq!(text(&buffer, "a"), "one");
}

#[test]
fn test_self_reference_uses_previous_binding() {
    let buffer = parse(&["let a = 1", "let a = ${a 1 +}", "let a = ${a 10 *}"]);
    assert_eq!(number(&buffer, "a"), 20.0);
}

#[test]
fn test_blank_lines_and_directives_are_ignored() {
    let buffer = parse(&["", "   \n", ":: version 2", "let a = 1", ":: let b = 2"]);
    assert_eq!(buffer.len(), 1);
    assert_eq!(number(&buffer, "a"), 1.0);
}

#[test]
fn test_directives_inside_comment_blocks_are_inert() {
    // Directive dispatch runs before the comment check; the line is skipped either way.
    let buffer = parse(&["/+", ":: directive inside a comment", "+/", "let a = 1"]);
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_comment_markers_take_trailing_text() {
    let buffer = parse(&["/+ start of notes", "let hidden = 1", "+/ end of notes", "let shown = 2"]);
    assert!(!buffer.contains("hidden"));
    assert_eq!(number(&buffer, "shown"), 2.0);
}

#[test]
fn test_comment_body_is_not_validated() {
    let buffer = parse(&["/+", "let d = a +", "%%% garbage", "let x = ${nothing}", "+/"]);
    assert!(buffer.is_empty());
}

#[test]
fn test_close_marker_outside_comment_is_accepted() {
    let buffer = parse(&["+/", "let a = 1"]);
    assert_eq!(number(&buffer, "a"), 1.0);
}

#[test]
fn test_unterminated_comment_is_a_syntax_error() {
    let err = parse_lines(&["let a = 1", "/+", "never closed"]).unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.line(), 2);
}

#[test]
fn test_expression_values() {
    let buffer = parse(&[
        "let width = 4",
        "let height = 2.5",
        "let area = ${width height *}",
        "let scores = array( 30, 10, 20 )",
        "let ranked = ${scores sort}",
    ]);
    assert_eq!(number(&buffer, "area"), 10.0);
    assert_eq!(array(&buffer, "ranked"), vec![10.0, 20.0, 30.0]);
    // Sorting a named array reorders the variable itself
    assert_eq!(array(&buffer, "scores"), vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_sorted_binding_keeps_its_position() {
    let buffer = parse(&["let raw = array( 3, 1, 2 )", "let other = 1", "let s = ${raw sort}"]);
    assert_eq!(buffer.get("raw"), Some(&Value::Array(vec![1.0, 2.0, 3.0])));
    assert_eq!(buffer.get("s"), Some(&Value::Array(vec![1.0, 2.0, 3.0])));
    assert_eq!(buffer.names().collect::<Vec<_>>(), vec!["raw", "other", "s"]);
}

#[test]
fn test_grouped_digits() {
    let buffer = parse(&["let a = 1_000", "let b = ${a 2_0 +}"]);
    assert_eq!(number(&buffer, "a"), 1000.0);
    assert_eq!(number(&buffer, "b"), 1020.0);
    assert!(parse_lines(&["let a = 1__000"]).unwrap_err().is_syntax_error());
}

#[test]
fn test_text_literal_whitespace_is_normalized() {
    let buffer = parse(&["let greeting = 'hello    big   world'"]);
    assert_eq!(text(&buffer, "greeting"), "hello big world");
}

#[test]
fn test_empty_array() {
    let buffer = parse(&["let empty = array(  )"]);
    assert_eq!(buffer.get("empty"), Some(&Value::Array(Vec::new())));
}

#[test]
fn test_windows_line_endings() {
    let buffer = parse_source("let a = 1\r\nlet b = 'x'\r\n").unwrap();
    assert_eq!(number(&buffer, "a"), 1.0);
    assert_eq!(text(&buffer, "b"), "x");
}

#[test]
fn test_first_error_aborts() {
    let err = parse_lines(&["let a = 1", "oops", "also wrong"]).unwrap_err();
    assert_eq!(err.line(), 2);
}
