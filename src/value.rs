use std::fmt;

/// A fully evaluated binding in the buffer
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Arrays only ever hold numbers
    Array(Vec<f64>),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(numeric_value) = self {
            Some(*numeric_value)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(text) = self {
            Some(text.as_str())
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[f64]> {
        if let Value::Array(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
        }
    }
}

impl From<f64> for Value {
    fn from(numeric_value: f64) -> Self {
        Value::Number(numeric_value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::Array(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:?}", n),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|n| format!("{:?}", n)).collect();
                write!(f, "array( {} )", rendered.join(", "))
            }
        }
    }
}
