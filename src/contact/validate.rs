use std::fmt;

use thiserror::Error;

use super::models::ContactDraft;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
}

/// Presence check only: whitespace counts as content and email format is not checked.
pub fn validate(draft: &ContactDraft) -> Result<(), ValidationError> {
    let required = [
        (Field::Name, &draft.name),
        (Field::Email, &draft.email),
        (Field::Message, &draft.message),
    ];
    match required.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}
