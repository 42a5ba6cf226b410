mod remote_repository_service;
mod snapshot_observer;

pub use remote_repository_service::*;
pub use snapshot_observer::*;
