use thiserror::Error;

/// Upper bound on topic text, matching the `VARCHAR(200)` column.
pub const TOPIC_TEXT_MAX_CHARS: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Required(&'static str),

    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),
}

/// A topic submission that passed validation.
#[derive(Debug, Clone)]
pub struct NewTopic {
    text: String,
}

impl NewTopic {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Required("text"));
        }
        if text.chars().count() > TOPIC_TEXT_MAX_CHARS {
            return Err(ValidationError::TooLong("text", TOPIC_TEXT_MAX_CHARS));
        }
        Ok(Self { text: text.to_owned() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// An entry submission that passed validation. Entry text has no upper bound.
#[derive(Debug, Clone)]
pub struct NewEntry {
    text: String,
}

impl NewEntry {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Required("text"));
        }
        Ok(Self { text: text.to_owned() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Editing an entry applies the same rules as creating one.
pub type EditEntry = NewEntry;
