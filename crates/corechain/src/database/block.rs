use crate::database::{
    block_key,
    Database,
};
use corechain_storage::{
    codec::{
        postcard::Postcard,
        primitive::Primitive,
        raw::Raw,
    },
    column::Column,
    Result as StorageResult,
};
use corechain_types::{
    blockchain::block::Block,
    BlockNumber,
    Bytes32,
    U256,
};

impl Database {
    /// Stores the block and the reverse lookup from its hash to its number.
    pub fn write_block(&self, block: &Block) -> StorageResult<()> {
        let hash = block.hash();
        let number = block.number();
        self.put_encoded::<Postcard, _>(&block_key(&hash, number), Column::Blocks, block)?;
        self.write_header_number(&hash, number)
    }

    pub fn block(&self, hash: &Bytes32, number: BlockNumber) -> StorageResult<Option<Block>> {
        self.get_decoded::<Postcard, _>(&block_key(hash, number), Column::Blocks)
    }

    pub fn has_block(&self, hash: &Bytes32, number: BlockNumber) -> StorageResult<bool> {
        self.exists(&block_key(hash, number), Column::Blocks)
    }

    pub fn write_header_number(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<()> {
        self.put_encoded::<Primitive<8>, _>(hash.as_bytes(), Column::HeaderNumbers, &number)
    }

    pub fn header_number(&self, hash: &Bytes32) -> StorageResult<Option<BlockNumber>> {
        self.get_decoded::<Primitive<8>, _>(hash.as_bytes(), Column::HeaderNumbers)
    }

    pub fn write_canonical_hash(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<()> {
        self.put_encoded::<Raw, _>(
            &number.to_be_bytes(),
            Column::CanonicalHashes,
            hash.as_bytes(),
        )
    }

    pub fn canonical_hash(&self, number: BlockNumber) -> StorageResult<Option<Bytes32>> {
        let hash: Option<[u8; 32]> =
            self.get_decoded::<Raw, _>(&number.to_be_bytes(), Column::CanonicalHashes)?;
        Ok(hash.map(Bytes32::from))
    }

    pub fn write_total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
        total_difficulty: &U256,
    ) -> StorageResult<()> {
        self.put_encoded::<Postcard, _>(
            &block_key(hash, number),
            Column::TotalDifficulty,
            total_difficulty,
        )
    }

    pub fn total_difficulty(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<Option<U256>> {
        self.get_decoded::<Postcard, _>(&block_key(hash, number), Column::TotalDifficulty)
    }
}
