use crate::interpreter::Buffer;
use crate::Value;

/// Non-finite numbers have no JSON spelling and come out as `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Number(numeric_value) => serde_json::Value::from(*numeric_value),
        Value::Text(text) => serde_json::Value::String(text.clone()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().copied().map(serde_json::Value::from).collect())
        }
    }
}

pub fn buffer_to_json(buffer: &Buffer) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for (name, value) in buffer.iter() {
        object.insert(name.to_string(), value_to_json(value));
    }
    serde_json::Value::Object(object)
}
