pub mod environment;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod validator;

pub use environment::Buffer;
pub use error::{EvaluationError, ParseError};
pub use evaluator::{evaluate_postfix, materialize, Evaluator};
pub use parser::{parse_lines, parse_source, CommentState, Parser};
pub use validator::{classify_line, is_valid_line};

use crate::diagnostic::Diagnostic;

/// Parses a whole document, reporting failure as renderable diagnostics.
pub fn parse_source_with_diagnostics(source: &str) -> Result<Buffer, Vec<Diagnostic>> {
    parse_source(source).map_err(|e| vec![e.to_diagnostic()])
}
