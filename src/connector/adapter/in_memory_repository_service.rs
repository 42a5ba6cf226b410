//! In-memory catalog service.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::RemoteRepositoryService;
use crate::domain::{DomainError, Record, RecordDraft};

/// In-memory stand-in for the remote catalog, for development and tests.
///
/// Behaves like the real service: assigns ids, initializes like counts to
/// zero, increments by one per like, and answers `NotFound` for unknown ids.
pub struct InMemoryRepositoryService {
    records: Mutex<Vec<Record>>,
}

impl InMemoryRepositoryService {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Seeded with a couple of sample records, for `--mock` runs.
    pub fn with_samples() -> Self {
        let samples = vec![
            Record {
                id: Uuid::new_v4().to_string(),
                title: "conceptual-nodejs".to_string(),
                url: "https://github.com/example/conceptual-nodejs".to_string(),
                techs: vec!["Node.js".to_string(), "Express".to_string()],
                likes: 3,
            },
            Record {
                id: Uuid::new_v4().to_string(),
                title: "conceptual-mobile".to_string(),
                url: "https://github.com/example/conceptual-mobile".to_string(),
                techs: vec!["React Native".to_string()],
                likes: 1,
            },
        ];

        Self {
            records: Mutex::new(samples),
        }
    }
}

impl Default for InMemoryRepositoryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteRepositoryService for InMemoryRepositoryService {
    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.clone())
    }

    async fn create(&self, draft: &RecordDraft) -> Result<Record, DomainError> {
        let record = Record {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            url: draft.url.clone(),
            techs: draft.techs.clone(),
            likes: 0,
        };

        let mut records = self.records.lock().await;
        records.push(record.clone());
        debug!("Mock catalog now holds {} records", records.len());

        Ok(record)
    }

    async fn like(&self, id: &str) -> Result<u64, DomainError> {
        let mut records = self.records.lock().await;
        let record = records
            .iter_mut()
            .find(|r| r.matches_id(id))
            .ok_or_else(|| DomainError::not_found(format!("No record with id {id}")))?;

        record.likes += 1;
        Ok(record.likes)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| !r.matches_id(id));

        if records.len() == before {
            return Err(DomainError::not_found(format!("No record with id {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RecordDraft {
        RecordDraft::new(title, "https://example.com", vec!["Rust".to_string()])
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids_and_zero_likes() {
        let service = InMemoryRepositoryService::new();

        let first = service.create(&draft("one")).await.unwrap();
        let second = service.create(&draft("two")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.likes, 0);
        assert_eq!(second.likes, 0);
    }

    #[tokio::test]
    async fn test_like_increments_by_one() {
        let service = InMemoryRepositoryService::new();
        let record = service.create(&draft("one")).await.unwrap();

        assert_eq!(service.like(&record.id).await.unwrap(), 1);
        assert_eq!(service.like(&record.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let service = InMemoryRepositoryService::new();

        assert!(service.like("missing").await.unwrap_err().is_not_found());
        assert!(service.delete("missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_only_the_target() {
        let service = InMemoryRepositoryService::new();
        let first = service.create(&draft("one")).await.unwrap();
        let second = service.create(&draft("two")).await.unwrap();

        service.delete(&first.id).await.unwrap();

        let remaining = service.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }
}
