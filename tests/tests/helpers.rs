use corechain_chain_config::{
    EthereumChainConfig,
    Genesis,
    GenesisAccount,
};
use corechain_types::{
    Address,
    Bytes32,
    U256,
};

/// The genesis with one funded account and the Homestead upgrade at `homestead`.
/// Only the configuration depends on `homestead`, so the genesis block is the same.
pub fn custom_genesis(homestead: u64) -> Genesis {
    let mut account = GenesisAccount::with_balance(U256::one());
    account
        .storage
        .insert(Bytes32::from_low_u64_be(1), Bytes32::from_low_u64_be(1));

    Genesis {
        config: Some(
            EthereumChainConfig {
                homestead_block: Some(homestead),
                ..Default::default()
            }
            .into(),
        ),
        alloc: [(Address::from_low_u64_be(1), account)]
            .into_iter()
            .collect(),
        ..Default::default()
    }
}
