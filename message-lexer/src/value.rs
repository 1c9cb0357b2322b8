use indexmap::IndexMap;
use serde::Serialize;

/// An argument or flag value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Bool(bool),
}

impl Value {
    /// Turns text mentioning `true` or `false` (in any case) into a boolean.
    ///
    /// Containing the word is enough: `"TRUE"` and `"untrue"` both become
    /// `true`. `true` is checked first.
    pub fn coerce(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_ascii_lowercase();
        if lowered.contains("true") {
            Value::Bool(true)
        } else if lowered.contains("false") {
            Value::Bool(false)
        } else {
            Value::Text(text)
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            Value::Text(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// What a message breaks down into: positional arguments and named flags.
///
/// Flags keep the order they were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub args: Vec<Value>,
    pub flags: IndexMap<String, Value>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.flags.is_empty()
    }
}
