//! The initial accounts of the chain.

use crate::serialization::{
    HexNumber,
    HexType,
};
use corechain_types::{
    fuel_crypto::Hasher,
    u256_to_be_bytes,
    Address,
    Bytes32,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_with::serde_as;
use std::collections::BTreeMap;

/// The account funded at the genesis.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    #[serde_as(as = "HexNumber")]
    pub balance: U256,
    #[serde(default, skip_serializing_if = "is_zero")]
    #[serde_as(as = "HexNumber")]
    pub nonce: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "HexType")]
    pub code: Vec<u8>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub storage: BTreeMap<Bytes32, Bytes32>,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl GenesisAccount {
    /// Creates the account which only holds the `balance`.
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }
}

/// The accounts of the genesis state ordered by the address.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[serde(transparent)]
pub struct GenesisAlloc(BTreeMap<Address, GenesisAccount>);

impl FromIterator<(Address, GenesisAccount)> for GenesisAlloc {
    fn from_iter<I: IntoIterator<Item = (Address, GenesisAccount)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl GenesisAlloc {
    /// Calculates the content hash of the allocation. The accounts and their storage
    /// are hashed in the ascending key order, variable-length fields are prefixed
    /// with their length, so equal allocations always have equal hashes.
    pub fn derive_hash(&self) -> Bytes32 {
        let mut hasher = Hasher::default().chain((self.0.len() as u64).to_be_bytes());
        for (address, account) in self.0.iter() {
            hasher = hasher
                .chain(address)
                .chain(u256_to_be_bytes(&account.balance))
                .chain(account.nonce.to_be_bytes())
                .chain((account.code.len() as u64).to_be_bytes())
                .chain(&account.code)
                .chain((account.storage.len() as u64).to_be_bytes());
            for (key, value) in account.storage.iter() {
                hasher = hasher.chain(key).chain(value);
            }
        }
        Bytes32::from(*hasher.finalize())
    }

    /// Encodes the allocation into the blob stored next to the genesis block.
    pub fn to_blob(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decodes the allocation from the stored blob.
    pub fn from_blob(blob: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(blob)
    }
}
