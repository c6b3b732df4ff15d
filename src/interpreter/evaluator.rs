use super::environment::Buffer;
use super::error::EvaluationError;
use crate::diagnostic::Span;
use crate::lexer::tokenize;
use crate::literal::Literal;
use crate::token::{BinaryOp, Function, Token};
use crate::value::Value;

/// A stack entry, remembering the buffer name it was read from.
#[derive(Debug)]
struct Slot {
    value: Value,
    binding: Option<String>,
}

impl Slot {
    fn computed(value: Value) -> Self {
        Self { value, binding: None }
    }
}

/// Runs postfix expressions against the variables bound so far.
///
/// Names push their bound value. `sort` works on the binding itself, so
/// sorting a named array also reorders that variable in the buffer.
pub struct Evaluator<'b> {
    buffer: &'b mut Buffer,
    stack: Vec<Slot>,
}

impl<'b> Evaluator<'b> {
    pub fn new(buffer: &'b mut Buffer) -> Self {
        Self {
            buffer,
            stack: Vec::new(),
        }
    }

    /// Evaluate `expression` (the body between `${` and `}`) in one left-to-right pass.
    ///
    /// Exactly one value must remain on the stack afterwards.
    pub fn evaluate(mut self, expression: &str) -> Result<Value, EvaluationError> {
        for (word, span) in tokenize(expression) {
            match Token::from_word(word) {
                Token::Number(n) => self.stack.push(Slot::computed(Value::Number(n))),
                Token::Operator(op) => self.apply_operator(op, span)?,
                Token::Word(name) => self.push_name(name, span)?,
            }
        }

        if self.stack.len() != 1 {
            return Err(EvaluationError::malformed(expression, self.stack.len()));
        }
        self.stack
            .pop()
            .map(|slot| slot.value)
            .ok_or_else(|| EvaluationError::malformed(expression, 0))
    }

    fn push_name(&mut self, name: &str, span: Span) -> Result<(), EvaluationError> {
        // Bound names win over function names
        if let Some(value) = self.buffer.get(name) {
            self.stack.push(Slot {
                value: value.clone(),
                binding: Some(name.to_string()),
            });
            return Ok(());
        }
        match Function::from_name(name) {
            Some(function) => self.apply_function(function, span),
            None => Err(EvaluationError::unrecognized_token(name, span)),
        }
    }

    fn apply_operator(&mut self, op: BinaryOp, span: Span) -> Result<(), EvaluationError> {
        let depth = self.stack.len();
        if depth < 2 {
            return Err(EvaluationError::missing_operands(op, depth, span));
        }
        let right = self.stack.pop().map(|slot| slot.value);
        let left = self.stack.pop().map(|slot| slot.value);

        match (left, right) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => {
                self.stack.push(Slot::computed(Value::Number(op.apply(a, b))));
                Ok(())
            }
            (Some(Value::Number(_)), Some(other)) | (Some(other), Some(_)) => {
                Err(EvaluationError::non_numeric_operand(op, other.type_name(), span))
            }
            _ => Err(EvaluationError::missing_operands(op, depth, span)),
        }
    }

    fn apply_function(&mut self, function: Function, span: Span) -> Result<(), EvaluationError> {
        match function {
            Function::Sort => {
                let sorted = match self.stack.last_mut() {
                    Some(Slot {
                        value: Value::Array(items),
                        binding,
                    }) => {
                        items.sort_by(f64::total_cmp);
                        binding.clone().map(|name| (name, items.clone()))
                    }
                    Some(other) => {
                        return Err(EvaluationError::not_an_array(
                            function.name(),
                            Some(other.value.type_name()),
                            span,
                        ))
                    }
                    None => return Err(EvaluationError::not_an_array(function.name(), None, span)),
                };
                if let Some((name, items)) = sorted {
                    self.write_back(&name, items);
                }
                Ok(())
            }
        }
    }

    /// Stores a sorted array into its binding and every stack entry read from it.
    fn write_back(&mut self, name: &str, items: Vec<f64>) {
        for slot in &mut self.stack {
            if slot.binding.as_deref() == Some(name) {
                slot.value = Value::Array(items.clone());
            }
        }
        self.buffer.set(name, Value::Array(items));
    }
}

pub fn evaluate_postfix(expression: &str, buffer: &mut Buffer) -> Result<Value, EvaluationError> {
    Evaluator::new(buffer).evaluate(expression)
}

/// Turn a classified literal into the value it denotes.
pub fn materialize(literal: Literal, buffer: &mut Buffer) -> Result<Value, EvaluationError> {
    match literal {
        Literal::Expression(body) => evaluate_postfix(&body, buffer),
        Literal::Number(n) => Ok(Value::Number(n)),
        Literal::Text(text) => Ok(Value::Text(text)),
        Literal::Array(items) => Ok(Value::Array(items)),
    }
}
