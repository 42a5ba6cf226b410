use async_trait::async_trait;

use crate::domain::{DomainError, Record, RecordDraft};

/// An interface to the remote repository catalog.
///
/// Implementors encapsulate transport and serialization details. Consumers
/// (e.g. [`crate::application::RepositoryListStore`]) only ever see confirmed
/// results; no error is suppressed or retried at this boundary.
#[async_trait]
pub trait RemoteRepositoryService: Send + Sync {
    /// Fetch the full current record sequence, in display order.
    async fn list(&self) -> Result<Vec<Record>, DomainError>;

    /// Create a record from the draft. The service assigns the id and
    /// initializes the like count.
    async fn create(&self, draft: &RecordDraft) -> Result<Record, DomainError>;

    /// Register one like for `id` and return the new authoritative count.
    async fn like(&self, id: &str) -> Result<u64, DomainError>;

    /// Delete the record with the given id.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
