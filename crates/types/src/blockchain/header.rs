//! Block header types

use crate::{
    fuel_crypto::Hasher,
    u256_to_be_bytes,
    Address,
    BlockNumber,
    Bytes32,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The header of the block. The hash of the header is the identifier of the block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The hash of the previous block. Zero for the genesis block.
    pub parent_hash: Bytes32,
    /// The beneficiary of the block rewards.
    pub coinbase: Address,
    /// The commitment to the accounts state after the block.
    pub state_root: Bytes32,
    /// The binary merkle root of the transactions of the block.
    pub transactions_root: Bytes32,
    /// The height of the block.
    pub number: BlockNumber,
    /// The gas limit of the block.
    pub gas_limit: u64,
    /// The gas used by the block.
    pub gas_used: u64,
    /// The unix timestamp of the block.
    pub timestamp: u64,
    /// Arbitrary data. For signer-rotation chains it encodes the signer set.
    pub extra_data: Vec<u8>,
    /// The proof-of-work mix digest.
    pub mix_digest: Bytes32,
    /// The proof-of-work nonce.
    pub nonce: u64,
    /// The difficulty of the block.
    pub difficulty: U256,
    /// The base fee of the block, present once the fee market is active.
    pub base_fee: Option<U256>,
}

impl Header {
    /// Calculates the hash of the header. The fields are hashed in the declaration order,
    /// the variable-length fields are prefixed with their length.
    pub fn hash(&self) -> Bytes32 {
        let mut hasher = Hasher::default()
            .chain(self.parent_hash)
            .chain(self.coinbase)
            .chain(self.state_root)
            .chain(self.transactions_root)
            .chain(self.number.to_be_bytes())
            .chain(self.gas_limit.to_be_bytes())
            .chain(self.gas_used.to_be_bytes())
            .chain(self.timestamp.to_be_bytes())
            .chain((self.extra_data.len() as u64).to_be_bytes())
            .chain(&self.extra_data)
            .chain(self.mix_digest)
            .chain(self.nonce.to_be_bytes())
            .chain(u256_to_be_bytes(&self.difficulty));

        hasher = match &self.base_fee {
            Some(base_fee) => hasher.chain([1u8]).chain(u256_to_be_bytes(base_fee)),
            None => hasher.chain([0u8]),
        };

        Bytes32::from(*hasher.finalize())
    }
}
