use crate::database::Database;
use corechain_chain_config::GenesisAccount;
use corechain_storage::{
    codec::postcard::Postcard,
    column::Column,
    Result as StorageResult,
};
use corechain_types::{
    Address,
    Bytes32,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The account as it is kept in the state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub balance: U256,
    pub nonce: u64,
    pub code: Vec<u8>,
    pub storage: Vec<(Bytes32, Bytes32)>,
}

impl From<&GenesisAccount> for Account {
    fn from(account: &GenesisAccount) -> Self {
        Self {
            balance: account.balance,
            nonce: account.nonce,
            code: account.code.clone(),
            storage: account
                .storage
                .iter()
                .map(|(key, value)| (*key, *value))
                .collect(),
        }
    }
}

fn account_key(state_root: &Bytes32, address: &Address) -> [u8; 52] {
    let mut key = [0u8; 52];
    key[..32].copy_from_slice(state_root.as_bytes());
    key[32..].copy_from_slice(address.as_bytes());
    key
}

impl Database {
    pub fn write_account(
        &self,
        state_root: &Bytes32,
        address: &Address,
        account: &Account,
    ) -> StorageResult<()> {
        self.put_encoded::<Postcard, _>(
            &account_key(state_root, address),
            Column::State,
            account,
        )
    }

    pub fn account(
        &self,
        state_root: &Bytes32,
        address: &Address,
    ) -> StorageResult<Option<Account>> {
        self.get_decoded::<Postcard, _>(&account_key(state_root, address), Column::State)
    }
}
