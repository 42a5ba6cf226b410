use crate::domain::Record;

/// Receives an immutable snapshot of the full record list after every
/// confirmed mutation of the store.
///
/// The slice is a copy taken under the store's lock; observers never see the
/// store's internal collection and cannot mutate it.
pub trait SnapshotObserver: Send + Sync {
    fn on_snapshot(&self, records: &[Record]);
}
