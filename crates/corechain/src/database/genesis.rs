//! The chain configuration and the genesis allocation records. Both are keyed by the
//! genesis hash, the allocation itself is content-addressed.

use crate::database::Database;
use corechain_chain_config::{
    ChainConfigurator,
    GenesisAlloc,
};
use corechain_storage::{
    codec::raw::Raw,
    column::Column,
    not_found,
    Error as StorageError,
    Result as StorageResult,
};
use corechain_types::Bytes32;

impl Database {
    /// Returns the stored configuration bytes as they were written.
    pub fn chain_config_raw(&self, genesis_hash: &Bytes32) -> StorageResult<Option<Vec<u8>>> {
        self.get_raw(genesis_hash.as_bytes(), Column::ChainConfig)
    }

    pub fn write_chain_config(
        &self,
        genesis_hash: &Bytes32,
        config: &ChainConfigurator,
    ) -> StorageResult<()> {
        let json = config
            .to_json()
            .map_err(|e| StorageError::Codec(anyhow::Error::new(e)))?;
        self.put_raw(genesis_hash.as_bytes(), Column::ChainConfig, &json)
    }

    pub fn genesis_alloc_blob(&self, content_hash: &Bytes32) -> StorageResult<Option<Vec<u8>>> {
        self.get_raw(content_hash.as_bytes(), Column::GenesisAlloc)
    }

    pub fn write_genesis_alloc_blob(
        &self,
        content_hash: &Bytes32,
        blob: &[u8],
    ) -> StorageResult<()> {
        self.put_raw(content_hash.as_bytes(), Column::GenesisAlloc, blob)
    }

    pub fn genesis_alloc_link(&self, genesis_hash: &Bytes32) -> StorageResult<Option<Bytes32>> {
        let content_hash: Option<[u8; 32]> =
            self.get_decoded::<Raw, _>(genesis_hash.as_bytes(), Column::GenesisAllocLinks)?;
        Ok(content_hash.map(Bytes32::from))
    }

    pub fn write_genesis_alloc_link(
        &self,
        genesis_hash: &Bytes32,
        content_hash: &Bytes32,
    ) -> StorageResult<()> {
        self.put_encoded::<Raw, _>(
            genesis_hash.as_bytes(),
            Column::GenesisAllocLinks,
            content_hash.as_bytes(),
        )
    }

    /// Follows the link of the genesis to its allocation and decodes it.
    pub fn genesis_alloc(&self, genesis_hash: &Bytes32) -> StorageResult<Option<GenesisAlloc>> {
        let Some(content_hash) = self.genesis_alloc_link(genesis_hash)? else {
            return Ok(None)
        };
        let blob = self
            .genesis_alloc_blob(&content_hash)?
            .ok_or(not_found!("GenesisAlloc"))?;
        let alloc = GenesisAlloc::from_blob(&blob)
            .map_err(|e| StorageError::Codec(anyhow::Error::new(e)))?;
        Ok(Some(alloc))
    }
}
