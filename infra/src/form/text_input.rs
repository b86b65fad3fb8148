use std::sync::RwLock;

use lf_core::FieldAccessor;

/// A text input addressable by id
#[derive(Debug)]
pub struct TextInput {
    id: String,
    value: RwLock<String>,
}

impl TextInput {
    /// Create an empty input
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_value(id, "")
    }

    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: RwLock::new(value.into()),
        }
    }

    /// Replace the current value, as typing into the input would
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(|e| e.into_inner()) = value.into();
    }
}

impl FieldAccessor for TextInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.value.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_value() {
        let input = TextInput::new("email");
        assert_eq!(input.id(), "email");
        assert_eq!(input.value(), "");

        input.set_value("a@b.com");
        assert_eq!(input.value(), "a@b.com");
    }
}
