use corechain_chain_config::{
    ChainConfigurator,
    GenesisAlloc,
};
use corechain_storage::Result as StorageResult;
use corechain_types::{
    blockchain::block::Block,
    BlockNumber,
    Bytes32,
    U256,
};

/// The store of the chain records the genesis bootstrap reads and writes.
pub trait GenesisDatabase {
    fn read_canonical_hash(&self, number: BlockNumber) -> StorageResult<Option<Bytes32>>;

    fn write_canonical_hash(&self, hash: &Bytes32, number: BlockNumber)
        -> StorageResult<()>;

    fn read_block(&self, hash: &Bytes32, number: BlockNumber)
        -> StorageResult<Option<Block>>;

    fn write_block(&self, block: &Block) -> StorageResult<()>;

    fn read_total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<Option<U256>>;

    fn write_total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
        total_difficulty: &U256,
    ) -> StorageResult<()>;

    /// Returns the hash and the number of the head header if the pointer is set.
    fn read_head_header(&self) -> StorageResult<Option<(Bytes32, BlockNumber)>>;

    fn write_head_header(&self, hash: &Bytes32, number: BlockNumber) -> StorageResult<()>;

    /// Returns the configuration bytes exactly as they were stored.
    fn read_config(&self, genesis_hash: &Bytes32) -> StorageResult<Option<Vec<u8>>>;

    fn write_config(
        &self,
        genesis_hash: &Bytes32,
        config: &ChainConfigurator,
    ) -> StorageResult<()>;

    fn read_genesis_alloc_blob(
        &self,
        content_hash: &Bytes32,
    ) -> StorageResult<Option<Vec<u8>>>;

    fn write_genesis_alloc_blob(
        &self,
        content_hash: &Bytes32,
        blob: &[u8],
    ) -> StorageResult<()>;

    fn read_genesis_alloc_link(
        &self,
        genesis_hash: &Bytes32,
    ) -> StorageResult<Option<Bytes32>>;

    fn write_genesis_alloc_link(
        &self,
        genesis_hash: &Bytes32,
        content_hash: &Bytes32,
    ) -> StorageResult<()>;
}

/// The state the genesis allocation is applied to.
pub trait GenesisStateDatabase {
    /// Writes the accounts of the `alloc` under the `state_root`.
    fn apply_alloc(&self, state_root: &Bytes32, alloc: &GenesisAlloc) -> StorageResult<()>;
}
