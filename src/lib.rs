pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{RemoteRepositoryService, RepositoryListStore, SnapshotObserver};

pub use cli::{Cli, Commands};

pub use connector::{
    ConsoleRenderer, HttpRepositoryService, InMemoryRepositoryService, DEFAULT_BASE_URL,
};

pub use domain::{DomainError, Record, RecordDraft};
