use crate::{
    database::{
        state::Account,
        Database,
    },
    service::genesis::ports::{
        GenesisDatabase,
        GenesisStateDatabase,
    },
};
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

impl GenesisDatabase for Database {
    fn read_canonical_hash(&self, number: BlockNumber) -> StorageResult<Option<Bytes32>> {
        self.canonical_hash(number)
    }

    fn write_canonical_hash(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<()> {
        Database::write_canonical_hash(self, hash, number)
    }

    fn read_block(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<Option<Block>> {
        self.block(hash, number)
    }

    fn write_block(&self, block: &Block) -> StorageResult<()> {
        Database::write_block(self, block)
    }

    fn read_total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<Option<U256>> {
        self.total_difficulty(hash, number)
    }

    fn write_total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
        total_difficulty: &U256,
    ) -> StorageResult<()> {
        Database::write_total_difficulty(self, hash, number, total_difficulty)
    }

    fn read_head_header(&self) -> StorageResult<Option<(Bytes32, BlockNumber)>> {
        self.head_header()
    }

    fn write_head_header(&self, hash: &Bytes32, number: BlockNumber) -> StorageResult<()> {
        Database::write_head_header(self, hash, number)
    }

    fn read_config(&self, genesis_hash: &Bytes32) -> StorageResult<Option<Vec<u8>>> {
        self.chain_config_raw(genesis_hash)
    }

    fn write_config(
        &self,
        genesis_hash: &Bytes32,
        config: &ChainConfigurator,
    ) -> StorageResult<()> {
        self.write_chain_config(genesis_hash, config)
    }

    fn read_genesis_alloc_blob(
        &self,
        content_hash: &Bytes32,
    ) -> StorageResult<Option<Vec<u8>>> {
        self.genesis_alloc_blob(content_hash)
    }

    fn write_genesis_alloc_blob(
        &self,
        content_hash: &Bytes32,
        blob: &[u8],
    ) -> StorageResult<()> {
        Database::write_genesis_alloc_blob(self, content_hash, blob)
    }

    fn read_genesis_alloc_link(
        &self,
        genesis_hash: &Bytes32,
    ) -> StorageResult<Option<Bytes32>> {
        self.genesis_alloc_link(genesis_hash)
    }

    fn write_genesis_alloc_link(
        &self,
        genesis_hash: &Bytes32,
        content_hash: &Bytes32,
    ) -> StorageResult<()> {
        Database::write_genesis_alloc_link(self, genesis_hash, content_hash)
    }
}

impl GenesisStateDatabase for Database {
    fn apply_alloc(&self, state_root: &Bytes32, alloc: &GenesisAlloc) -> StorageResult<()> {
        for (address, account) in alloc.iter() {
            self.write_account(state_root, address, &Account::from(account))?;
        }
        Ok(())
    }
}
