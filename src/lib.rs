pub mod ast;
pub mod cli;
pub mod config;
pub mod convert;
pub mod diagnostic;
pub mod format;
pub mod interpreter;
pub mod lexer;
pub mod literal;
pub mod source;
pub mod token;
pub mod value;

pub use ast::Line;
pub use interpreter::{parse_lines, parse_source, Buffer, ParseError};
pub use literal::Literal;
pub use value::Value;
