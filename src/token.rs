use std::fmt;

use crate::literal::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Applies `left <op> right`; division follows IEEE 754, so `x / 0` is infinite or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Functions applied to the top of the evaluation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sort,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sort" => Some(Function::Sort),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sort => "sort",
        }
    }
}

/// A word of a postfix expression.
///
/// Names are kept as plain words: whether `sort` is a function or a variable
/// depends on what the buffer holds when the expression runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Number(f64),
    Operator(BinaryOp),
    Word(&'a str),
}

impl<'a> Token<'a> {
    pub fn from_word(word: &'a str) -> Self {
        if let Some(number) = parse_number(word) {
            Token::Number(number)
        } else if let Some(op) = BinaryOp::from_symbol(word) {
            Token::Operator(op)
        } else {
            Token::Word(word)
        }
    }
}
