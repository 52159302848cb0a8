use corechain_storage::{
    column::Column,
    kv_store::KeyValueStore,
    Result as StorageResult,
};
use std::{
    fmt::Debug,
    sync::Arc,
};

pub mod in_memory;

pub type DataSource = Arc<dyn TransactableStorage>;

/// The key-value store which can back the [`Database`](crate::database::Database).
pub trait TransactableStorage:
    KeyValueStore<Column = Column> + Debug + Send + Sync
{
    /// Drops all values of the store.
    fn flush(&self) -> StorageResult<()>;
}
