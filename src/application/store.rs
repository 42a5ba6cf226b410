use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::application::{RemoteRepositoryService, SnapshotObserver};
use crate::domain::{DomainError, Record, RecordDraft};

/// Authoritative client-side copy of the repository catalog.
///
/// The store is the single writer of its record list. Every operation is one
/// remote round trip, and the list is mutated only after the service confirms
/// the result, so the local view is never ahead of the server. On failure the
/// list is left exactly as it was and the error is returned to the caller.
///
/// Remote calls are awaited outside the list lock, so operations issued
/// before earlier ones resolve may overlap. Overlapping likes for the same id
/// are not serialized: the response that completes last determines the final
/// count.
pub struct RepositoryListStore {
    service: Arc<dyn RemoteRepositoryService>,
    records: Mutex<Vec<Record>>,
    observers: Mutex<Vec<Arc<dyn SnapshotObserver>>>,
}

impl RepositoryListStore {
    /// Create an empty store backed by the given service.
    pub fn new(service: Arc<dyn RemoteRepositoryService>) -> Self {
        Self {
            service,
            records: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register an observer. It will be handed a snapshot after every
    /// confirmed mutation from then on.
    pub async fn subscribe(&self, observer: Arc<dyn SnapshotObserver>) {
        self.observers.lock().await.push(observer);
    }

    /// Copy of the current record list.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.lock().await.clone()
    }

    /// Replace the local list wholesale with the service's current sequence,
    /// preserving the order the service returned.
    pub async fn load(&self) -> Result<Vec<Record>, DomainError> {
        let fetched = self.service.list().await?;
        info!("Loaded {} records from the catalog", fetched.len());

        let snapshot = {
            let mut records = self.records.lock().await;
            *records = fetched;
            records.clone()
        };
        self.publish(&snapshot).await;

        Ok(snapshot)
    }

    /// Create a record from the draft and append the confirmed result at the
    /// end of the list.
    pub async fn add(&self, draft: &RecordDraft) -> Result<Record, DomainError> {
        draft.validate()?;

        let created = self.service.create(draft).await?;
        info!("Created record {} ({})", created.id, created.title);

        let snapshot = {
            let mut records = self.records.lock().await;
            records.push(created.clone());
            records.clone()
        };
        self.publish(&snapshot).await;

        Ok(created)
    }

    /// Register a like for `id` and overwrite that record's count with the
    /// confirmed value. No other record or field changes.
    ///
    /// Fails with `NotFound` when the id is not held locally, checked both
    /// before the remote call and again when applying the result (the record
    /// may have been removed while the call was in flight). Neither path
    /// mutates the list.
    pub async fn like(&self, id: &str) -> Result<u64, DomainError> {
        if !self.contains(id).await {
            return Err(DomainError::not_found(format!(
                "Record not held locally: {id}"
            )));
        }

        let likes = self.service.like(id).await?;

        let snapshot = {
            let mut records = self.records.lock().await;
            let record = records.iter_mut().find(|r| r.matches_id(id)).ok_or_else(|| {
                DomainError::not_found(format!("Record removed while like was in flight: {id}"))
            })?;
            record.likes = likes;
            debug!("Record {} now has {} likes", id, likes);
            records.clone()
        };
        self.publish(&snapshot).await;

        Ok(likes)
    }

    /// Delete the record with `id` and excise it from the list, preserving
    /// the relative order of the rest.
    ///
    /// An id the store does not hold is a no-op: nothing is sent and
    /// `Ok(false)` is returned. `Ok(true)` means the record was deleted.
    pub async fn remove(&self, id: &str) -> Result<bool, DomainError> {
        if !self.contains(id).await {
            debug!("Ignoring remove for unknown record {}", id);
            return Ok(false);
        }

        self.service.delete(id).await?;
        info!("Deleted record {}", id);

        let snapshot = {
            let mut records = self.records.lock().await;
            records.retain(|r| !r.matches_id(id));
            records.clone()
        };
        self.publish(&snapshot).await;

        Ok(true)
    }

    async fn contains(&self, id: &str) -> bool {
        self.records.lock().await.iter().any(|r| r.matches_id(id))
    }

    async fn publish(&self, snapshot: &[Record]) {
        let observers = self.observers.lock().await;
        for observer in observers.iter() {
            observer.on_snapshot(snapshot);
        }
    }
}
