use crate::database::Database;
use corechain_storage::{
    codec::raw::Raw,
    column::Column,
    not_found,
    Result as StorageResult,
};
use corechain_types::{
    BlockNumber,
    Bytes32,
};

/// The hash of the head header of the chain.
pub(crate) const HEAD_HEADER_KEY: &[u8] = b"LastHeader";

impl Database {
    /// Moves the head header pointer to the block.
    pub fn write_head_header(
        &self,
        hash: &Bytes32,
        number: BlockNumber,
    ) -> StorageResult<()> {
        self.put_encoded::<Raw, _>(HEAD_HEADER_KEY, Column::Metadata, hash.as_bytes())?;
        self.write_header_number(hash, number)
    }

    pub fn head_header_hash(&self) -> StorageResult<Option<Bytes32>> {
        let hash: Option<[u8; 32]> =
            self.get_decoded::<Raw, _>(HEAD_HEADER_KEY, Column::Metadata)?;
        Ok(hash.map(Bytes32::from))
    }

    /// Returns the hash and the number of the head header. The number of the head
    /// must be known once the pointer is set.
    pub fn head_header(&self) -> StorageResult<Option<(Bytes32, BlockNumber)>> {
        let Some(hash) = self.head_header_hash()? else {
            return Ok(None)
        };
        let number = self
            .header_number(&hash)?
            .ok_or(not_found!("HeadHeaderNumber"))?;
        Ok(Some((hash, number)))
    }
}
