use crate::config::{
    GenesisAccount,
    GenesisAlloc,
};
use corechain_types::{
    fuel_crypto::Hasher,
    fuel_merkle::binary::root_calculator::MerkleRootCalculator,
    u256_to_be_bytes,
    MerkleRoot,
};

pub trait GenesisCommitment {
    /// Calculates the merkle root of the state of the entity.
    fn root(&self) -> anyhow::Result<MerkleRoot>;
}

impl GenesisCommitment for GenesisAccount {
    fn root(&self) -> anyhow::Result<MerkleRoot> {
        let mut storage = MerkleRootCalculator::new();
        for (key, value) in self.storage.iter() {
            let slot = Hasher::default().chain(key).chain(value).finalize();
            storage.push(slot.as_ref());
        }

        let account_hash = *Hasher::default()
            .chain(u256_to_be_bytes(&self.balance))
            .chain(self.nonce.to_be_bytes())
            .chain(Hasher::hash(&self.code))
            .chain(storage.root())
            .finalize();

        Ok(account_hash)
    }
}

impl GenesisCommitment for GenesisAlloc {
    fn root(&self) -> anyhow::Result<MerkleRoot> {
        let mut accounts = MerkleRootCalculator::new();
        for (address, account) in self.iter() {
            let leaf = Hasher::default().chain(address).chain(account.root()?).finalize();
            accounts.push(leaf.as_ref());
        }

        Ok(accounts.root())
    }
}
