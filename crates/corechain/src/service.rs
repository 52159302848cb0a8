use crate::database::Database;
use corechain_chain_config::ChainConfigurator;
use corechain_types::Bytes32;

pub use config::Config;
pub use genesis::{
    GenesisSetup,
    SetupError,
};

pub mod adapters;
pub mod config;
pub mod genesis;

/// The node state after the genesis bootstrap.
#[derive(Clone, Debug)]
pub struct CoreService {
    /// The store the node runs on.
    pub database: Database,
    /// The configuration of the chain in the store.
    pub chain_config: ChainConfigurator,
    /// The hash of the genesis block in the store.
    pub genesis_hash: Bytes32,
}

impl CoreService {
    /// Runs the genesis bootstrap over the `database`. The store is left untouched when
    /// the configured genesis can't be applied to it.
    pub fn new(database: Database, config: &Config) -> Result<Self, SetupError> {
        let GenesisSetup { config, hash } = genesis::setup_genesis_block(
            &database,
            &database,
            config.genesis.as_ref(),
        )?;
        tracing::info!("Chain {:#x} is ready", hash);

        Ok(Self {
            database,
            chain_config: config,
            genesis_hash: hash,
        })
    }
}
