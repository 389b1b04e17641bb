#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemorySnapshots, SnapshotRepository, StorageError};
pub use sqlite::{SqliteInitError, SqliteSnapshots};
