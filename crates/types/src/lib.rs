//! The crate `corechain-types` contains the primitive types and the block structure used
//! by the genesis bootstrap of the node.

#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]
#![warn(missing_docs)]

pub mod blockchain;

#[doc(no_inline)]
pub use fuel_crypto;
#[doc(no_inline)]
pub use fuel_merkle;
pub use primitive_types::{
    H160,
    H256,
    U256,
};

/// The 20 bytes account address.
pub type Address = H160;

/// The 32 bytes hash or storage word.
pub type Bytes32 = H256;

/// The height of the block.
pub type BlockNumber = u64;

/// The root of the binary merkle tree.
pub type MerkleRoot = [u8; 32];

/// Big-endian bytes of the `U256`.
pub fn u256_to_be_bytes(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}
