use crate::state::{
    in_memory::memory_store::MemoryStore,
    DataSource,
};
use corechain_storage::{
    codec::{
        Decode,
        Encode,
    },
    column::Column,
    Error as StorageError,
    Result as StorageResult,
};
use corechain_types::{
    BlockNumber,
    Bytes32,
};
use std::sync::Arc;

// Storages implementation
pub mod block;
pub mod genesis;
pub mod metadata;
pub mod state;

/// The typed view over the key-value store used by the genesis bootstrap.
#[derive(Clone, Debug)]
pub struct Database {
    data: DataSource,
}

impl Database {
    pub fn new(data_source: DataSource) -> Self {
        Self { data: data_source }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn flush(&self) -> StorageResult<()> {
        self.data.flush()
    }

    /// Returns the raw bytes stored under the `key`.
    pub fn get_raw(&self, key: &[u8], column: Column) -> StorageResult<Option<Vec<u8>>> {
        Ok(self
            .data
            .get(key, column)?
            .map(|value| value.as_ref().clone()))
    }

    /// Writes the raw bytes under the `key` without any encoding.
    pub fn put_raw(&self, key: &[u8], column: Column, value: &[u8]) -> StorageResult<()> {
        self.data.write(key, column, value).map(|_| ())
    }

    pub(crate) fn get_decoded<Codec, V>(
        &self,
        key: &[u8],
        column: Column,
    ) -> StorageResult<Option<V>>
    where
        Codec: Decode<V>,
    {
        self.data
            .get(key, column)?
            .map(|value| Codec::decode_from_value(value).map_err(StorageError::Codec))
            .transpose()
    }

    pub(crate) fn put_encoded<Codec, V>(
        &self,
        key: &[u8],
        column: Column,
        value: &V,
    ) -> StorageResult<()>
    where
        Codec: Encode<V>,
        V: ?Sized,
    {
        self.data.put(key, column, Codec::encode_as_value(value))
    }

    pub(crate) fn exists(&self, key: &[u8], column: Column) -> StorageResult<bool> {
        self.data.exists(key, column)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// The key of the entries addressed by the block: the big-endian number followed by the hash.
pub(crate) fn block_key(hash: &Bytes32, number: BlockNumber) -> [u8; 40] {
    let mut key = [0u8; 40];
    key[..8].copy_from_slice(&number.to_be_bytes());
    key[8..].copy_from_slice(hash.as_bytes());
    key
}
