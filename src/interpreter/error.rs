use crate::diagnostic::{Diagnostic, Label, Span};
use crate::token::BinaryOp;

/// Failures raised while running a postfix expression.
///
/// Spans are relative to the expression body; the parser moves them onto the
/// source line when it wraps the error.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    UnrecognizedToken { token: String, span: Span },
    MissingOperands { op: BinaryOp, found: usize, span: Span },
    NonNumericOperand { op: BinaryOp, found: &'static str, span: Span },
    NotAnArray { function: &'static str, found: Option<&'static str>, span: Span },
    Malformed { expression: String, remaining: usize },
}

impl EvaluationError {
    pub fn unrecognized_token(token: impl Into<String>, span: Span) -> Self {
        Self::UnrecognizedToken { token: token.into(), span }
    }

    pub fn missing_operands(op: BinaryOp, found: usize, span: Span) -> Self {
        Self::MissingOperands { op, found, span }
    }

    pub fn non_numeric_operand(op: BinaryOp, found: &'static str, span: Span) -> Self {
        Self::NonNumericOperand { op, found, span }
    }

    pub fn not_an_array(function: &'static str, found: Option<&'static str>, span: Span) -> Self {
        Self::NotAnArray { function, found, span }
    }

    pub fn malformed(expression: impl Into<String>, remaining: usize) -> Self {
        Self::Malformed { expression: expression.into(), remaining }
    }

    /// Span of the offending token, if a single token is to blame
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnrecognizedToken { span, .. }
            | Self::MissingOperands { span, .. }
            | Self::NonNumericOperand { span, .. }
            | Self::NotAnArray { span, .. } => Some(*span),
            Self::Malformed { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedToken { .. } => "E0201",
            Self::MissingOperands { .. } => "E0202",
            Self::NonNumericOperand { .. } => "E0203",
            Self::NotAnArray { .. } => "E0204",
            Self::Malformed { .. } => "E0205",
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::UnrecognizedToken { token, .. } => {
                write!(f, "unrecognized token `{}` in expression", token)
            }
            EvaluationError::MissingOperands { op, found, .. } => {
                write!(f, "operator `{}` needs two operands but found {}", op, found)
            }
            EvaluationError::NonNumericOperand { op, found, .. } => {
                write!(f, "operator `{}` expects numbers but found {}", op, found)
            }
            EvaluationError::NotAnArray { function, found: Some(found), .. } => {
                write!(f, "`{}` expects an array on top of the stack but found {}", function, found)
            }
            EvaluationError::NotAnArray { function, found: None, .. } => {
                write!(f, "`{}` expects an array but the stack is empty", function)
            }
            EvaluationError::Malformed { expression, remaining } => write!(
                f,
                "malformed postfix expression `{}`: {} value(s) left on the stack",
                expression.trim(),
                remaining
            ),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Any failure that aborts a parse run
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A line that matches none of the statement forms
    InvalidLine { line: usize, text: String, span: Span },
    /// Input ended inside a `/+` block; `line` is where the block was opened
    UnterminatedComment { line: usize, span: Span },
    Evaluation { line: usize, error: EvaluationError, span: Span },
}

impl ParseError {
    pub fn invalid_line(line: usize, text: impl Into<String>, span: Span) -> Self {
        Self::InvalidLine { line, text: text.into(), span }
    }

    pub fn unterminated_comment(line: usize, span: Span) -> Self {
        Self::UnterminatedComment { line, span }
    }

    pub fn evaluation(line: usize, error: EvaluationError, span: Span) -> Self {
        Self::Evaluation { line, error, span }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::InvalidLine { line, .. }
            | Self::UnterminatedComment { line, .. }
            | Self::Evaluation { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::InvalidLine { span, .. }
            | Self::UnterminatedComment { span, .. }
            | Self::Evaluation { span, .. } => *span,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::InvalidLine { .. } | Self::UnterminatedComment { .. })
    }

    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Self::Evaluation { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::InvalidLine { line, span, .. } => {
                Diagnostic::error(format!("invalid statement on line {}", line))
                    .with_code("E0101")
                    .with_label(Label::new(*span, "not a valid line"))
                    .with_help("expected `let <name> = <literal>`, `::`, `/+` or `+/`")
            }
            Self::UnterminatedComment { span, .. } => {
                Diagnostic::error("unterminated comment block")
                    .with_code("E0102")
                    .with_label(Label::new(*span, "comment block opened here"))
                    .with_help("close the block with a line starting with `+/`")
            }
            Self::Evaluation { error, span, .. } => {
                Diagnostic::error(error.to_string())
                    .with_code(error.code())
                    .with_label(Label::new(*span, "while evaluating this expression"))
            }
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidLine { line, text, .. } => {
                write!(f, "Syntax error on line {}: {}", line, text)
            }
            ParseError::UnterminatedComment { line, .. } => {
                write!(f, "Syntax error: comment block opened on line {} is never closed", line)
            }
            ParseError::Evaluation { line, error, .. } => {
                write!(f, "Evaluation error on line {}: {}", line, error)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Evaluation { error, .. } => Some(error),
            _ => None,
        }
    }
}
