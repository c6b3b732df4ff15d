use crate::value::Value;
use indexmap::IndexMap;

/// The variables bound so far, in the order they were first declared.
///
/// Re-binding a name replaces its value but keeps its original position, so
/// output documents list keys in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buffer {
    bindings: IndexMap<String, Value>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the value it replaced, if any.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.bindings
    }
}

impl FromIterator<(String, Value)> for Buffer {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
