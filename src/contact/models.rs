use serde::{Deserialize, Serialize};

/// Raw values read from the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Submission timestamp in both display and machine form.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    pub date: String,
    pub timestamp: i64,
}

/// One stored contact form submission, as persisted in localStorage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
    pub date: String,
    pub timestamp: i64,
}

impl Submission {
    pub fn from_draft(draft: &ContactDraft, stamp: Stamp) -> Self {
        Submission {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            message: draft.message.clone(),
            date: stamp.date,
            timestamp: stamp.timestamp,
        }
    }
}
