//! The module provides plain abstract definition of the key-value store.

use crate::Result as StorageResult;
use std::sync::Arc;

/// The key of the storage.
pub type Key = Vec<u8>;
/// The value of the storage. It is wrapped into the `Arc` to provide less cloning of massive objects.
pub type Value = Arc<Vec<u8>>;

/// A column of the storage.
pub trait StorageColumn: Copy + core::fmt::Debug {
    /// Returns the name of the column.
    fn name(&self) -> &'static str;

    /// Returns the id of the column.
    fn id(&self) -> u32;

    /// Returns the id of the column as an `usize`.
    fn as_usize(&self) -> usize {
        self.id() as usize
    }
}

/// The definition of the key-value store. The store handles its own synchronization,
/// so mutation only requires a shared reference.
#[impl_tools::autoimpl(for<T: trait> &T, Box<T>, Arc<T>)]
pub trait KeyValueStore {
    /// The type of the column.
    type Column: StorageColumn;

    /// Inserts the `Value` into the storage.
    fn put(&self, key: &[u8], column: Self::Column, value: Value) -> StorageResult<()> {
        self.write(key, column, value.as_ref()).map(|_| ())
    }

    /// Writes the `buf` into the storage and returns the number of written bytes.
    fn write(&self, key: &[u8], column: Self::Column, buf: &[u8])
        -> StorageResult<usize>;

    /// Removes the value from the storage.
    fn delete(&self, key: &[u8], column: Self::Column) -> StorageResult<()>;

    /// Checks if the value exists in the storage.
    fn exists(&self, key: &[u8], column: Self::Column) -> StorageResult<bool> {
        Ok(self.size_of_value(key, column)?.is_some())
    }

    /// Returns the size of the value in the storage.
    fn size_of_value(
        &self,
        key: &[u8],
        column: Self::Column,
    ) -> StorageResult<Option<usize>> {
        Ok(self.get(key, column)?.map(|value| value.len()))
    }

    /// Returns the value from the storage.
    fn get(&self, key: &[u8], column: Self::Column) -> StorageResult<Option<Value>>;
}
