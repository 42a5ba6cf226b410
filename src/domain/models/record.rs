use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One repository entry as served by the catalog.
///
/// The `likes` counter always carries the last value confirmed by the remote
/// service; it is never derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl Record {
    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id
    }

    pub fn summary(&self) -> String {
        let noun = if self.likes == 1 { "like" } else { "likes" };
        format!("{} ({} {})", self.title, self.likes, noun)
    }
}

/// User-supplied fields for creating a new record. The service assigns the
/// id and the initial like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDraft {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

impl RecordDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>, techs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            techs,
        }
    }

    /// Rejects drafts that would be meaningless on the wire.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::invalid_input("Draft title cannot be empty"));
        }
        Ok(())
    }
}
