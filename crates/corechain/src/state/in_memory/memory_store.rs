use crate::state::TransactableStorage;
use corechain_storage::{
    column::Column,
    kv_store::{
        KeyValueStore,
        StorageColumn,
        Value,
    },
    Result as StorageResult,
};
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    sync::Arc,
};

#[derive(Default, Debug)]
pub struct MemoryStore {
    inner: [Mutex<BTreeMap<Vec<u8>, Value>>; Column::COUNT],
}

impl MemoryStore {
    /// Returns the number of entries in the `column`.
    pub fn len(&self, column: Column) -> usize {
        self.inner[column.as_usize()].lock().len()
    }
}

impl KeyValueStore for MemoryStore {
    type Column = Column;

    fn write(&self, key: &[u8], column: Column, buf: &[u8]) -> StorageResult<usize> {
        let len = buf.len();
        self.inner[column.as_usize()]
            .lock()
            .insert(key.to_vec(), Arc::new(buf.to_vec()));
        Ok(len)
    }

    fn delete(&self, key: &[u8], column: Column) -> StorageResult<()> {
        self.inner[column.as_usize()].lock().remove(key);
        Ok(())
    }

    fn get(&self, key: &[u8], column: Column) -> StorageResult<Option<Value>> {
        Ok(self.inner[column.as_usize()].lock().get(key).cloned())
    }
}

impl TransactableStorage for MemoryStore {
    fn flush(&self) -> StorageResult<()> {
        for lock in self.inner.iter() {
            lock.lock().clear();
        }
        Ok(())
    }
}
