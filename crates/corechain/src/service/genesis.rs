//! The genesis bootstrap. On every start the node decides which genesis block and which
//! chain configuration are authoritative for the store, and refuses to apply the
//! configuration which contradicts the history already in it.

use crate::service::genesis::ports::{
    GenesisDatabase,
    GenesisStateDatabase,
};
use corechain_chain_config::{
    check_compatible,
    clique::{
        self,
        CliqueExtraDataError,
    },
    fallback_configurator,
    resolve,
    ChainConfigurator,
    ConfigCompatError,
    Configurator,
    DecodeError,
    EngineKind,
    Genesis,
    GenesisAlloc,
    Network,
};
use corechain_storage::{
    not_found,
    Error as StorageError,
};
use corechain_types::{
    blockchain::block::Block,
    Bytes32,
};

pub mod ports;

/// The failure of the genesis bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("genesis has no chain configuration")]
    NoConfig,
    #[error("invalid clique extra data: {0}")]
    InvalidCliqueConfig(#[from] CliqueExtraDataError),
    #[error(transparent)]
    GenesisMismatch(#[from] GenesisMismatchError),
    #[error(transparent)]
    ConfigCompat(#[from] ConfigCompatError),
    #[error("failed to decode the stored chain configuration: {0}")]
    ConfigDecode(#[from] DecodeError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The store holds another genesis block than the configured one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("database contains incompatible genesis (have {stored:#x}, new {new:#x})")]
pub struct GenesisMismatchError {
    pub stored: Bytes32,
    pub new: Bytes32,
}

/// The outcome of the successful bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisSetup {
    /// The configuration the node must run with.
    pub config: ChainConfigurator,
    /// The hash of the genesis block of the chain.
    pub hash: Bytes32,
}

/// The failed bootstrap. Next to the error it carries the configuration and the genesis
/// hash the caller may report or fall back to.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct SetupError {
    #[source]
    pub error: Error,
    pub config: Option<ChainConfigurator>,
    pub hash: Option<Bytes32>,
}

impl SetupError {
    fn new(
        error: impl Into<Error>,
        config: Option<ChainConfigurator>,
        hash: Option<Bytes32>,
    ) -> Self {
        Self {
            error: error.into(),
            config,
            hash,
        }
    }
}

/// Decides which genesis and configuration the store must be run with, committing the
/// genesis into the empty store and upgrading the stored configuration when it is safe.
/// The store is not modified if an error is returned.
pub fn setup_genesis_block<D, S>(
    database: &D,
    state: &S,
    genesis: Option<&Genesis>,
) -> Result<GenesisSetup, SetupError>
where
    D: GenesisDatabase + ?Sized,
    S: GenesisStateDatabase + ?Sized,
{
    let new_config = match genesis {
        Some(genesis) => match &genesis.config {
            Some(config) => Some(config.clone()),
            None => {
                return Err(SetupError::new(
                    Error::NoConfig,
                    Some(fallback_configurator()),
                    None,
                ))
            }
        },
        None => None,
    };

    let stored = database
        .read_canonical_hash(0)
        .map_err(|e| SetupError::new(e, new_config.clone(), None))?;

    // Just commit the new block if there is no stored genesis block.
    let Some(stored) = stored else {
        let genesis = match genesis {
            Some(genesis) => {
                tracing::info!("Writing custom genesis block");
                genesis.clone()
            }
            None => {
                tracing::info!("Writing default main-net genesis block");
                Genesis::mainnet()
            }
        };
        let block = commit_genesis(&genesis, database, state)
            .map_err(|e| SetupError::new(e, genesis.config.clone(), None))?;
        return Ok(GenesisSetup {
            config: genesis.config.unwrap_or_else(fallback_configurator),
            hash: block.hash(),
        })
    };

    let (Some(genesis), Some(new_config)) = (genesis, new_config) else {
        return stored_setup(database, stored)
            .map_err(|e| SetupError::new(e, None, Some(stored)))
    };

    // Check whether the genesis block is already written.
    let hash = genesis
        .to_block()
        .map_err(|e| SetupError::new(e, Some(new_config.clone()), None))?
        .hash();
    if hash != stored {
        return Err(SetupError::new(
            GenesisMismatchError { stored, new: hash },
            Some(new_config),
            Some(hash),
        ))
    }

    upgrade_config(database, stored, &new_config)
        .map_err(|e| SetupError::new(e, Some(new_config.clone()), Some(stored)))?;
    Ok(GenesisSetup {
        config: new_config,
        hash: stored,
    })
}

/// Returns the stored configuration of the stored genesis. If the record is missing,
/// the configuration of the well-known network with this genesis is written. A genesis
/// shared by several networks gets the fallback configuration.
fn stored_setup<D>(database: &D, stored: Bytes32) -> Result<GenesisSetup, Error>
where
    D: GenesisDatabase + ?Sized,
{
    let config = match database.read_config(&stored)? {
        Some(raw) => resolve(&raw)?,
        None => {
            tracing::warn!("Found genesis block without chain config");
            let config = Network::from_genesis_hash(&stored)?
                .map(|network| network.chain_config().into())
                .unwrap_or_else(fallback_configurator);
            database.write_config(&stored, &config)?;
            config
        }
    };
    Ok(GenesisSetup {
        config,
        hash: stored,
    })
}

/// Replaces the stored configuration with the `new` one if the committed history
/// doesn't contradict it.
fn upgrade_config<D>(
    database: &D,
    stored: Bytes32,
    new: &ChainConfigurator,
) -> Result<(), Error>
where
    D: GenesisDatabase + ?Sized,
{
    let Some(raw) = database.read_config(&stored)? else {
        tracing::warn!("Found genesis block without chain config");
        database.write_config(&stored, new)?;
        return Ok(())
    };
    let stored_config = resolve(&raw)?;
    tracing::debug!(
        "Stored chain config uses the {} schema",
        stored_config.variant()
    );

    let (_, head) = database
        .read_head_header()?
        .ok_or(not_found!("HeadHeader"))?;
    if let Err(err) = check_compatible(&stored_config, new, head) {
        tracing::warn!("Chain config is incompatible with the stored history: {}", err);
        return Err(err.into())
    }

    tracing::info!("Writing the chain config of the genesis {:#x}", stored);
    database.write_config(&stored, new)?;
    Ok(())
}

/// Writes the genesis block with its state and configuration into the store.
pub fn commit_genesis<D, S>(
    genesis: &Genesis,
    database: &D,
    state: &S,
) -> Result<Block, Error>
where
    D: GenesisDatabase + ?Sized,
    S: GenesisStateDatabase + ?Sized,
{
    let config = genesis.config.as_ref().ok_or(Error::NoConfig)?;
    if config.engine().kind() == EngineKind::Clique {
        clique::signers(&genesis.extra_data)?;
    }

    let block = genesis.to_block()?;
    let hash = block.hash();
    let number = block.number();
    state.apply_alloc(&block.header().state_root, &genesis.alloc)?;

    database.write_total_difficulty(&hash, number, &block.difficulty())?;
    database.write_block(&block)?;
    database.write_canonical_hash(&hash, number)?;
    database.write_config(&hash, config)?;
    write_genesis_alloc(database, &hash, &genesis.alloc)?;
    if database.read_head_header()?.is_none() {
        database.write_head_header(&hash, number)?;
    }

    Ok(block)
}

/// Commits the genesis and panics on failure. Only for the bootstrap of the known
/// chains and tests.
pub fn must_commit_genesis<D, S>(genesis: &Genesis, database: &D, state: &S) -> Block
where
    D: GenesisDatabase + ?Sized,
    S: GenesisStateDatabase + ?Sized,
{
    match commit_genesis(genesis, database, state) {
        Ok(block) => block,
        Err(err) => panic!("failed to commit the genesis: {err}"),
    }
}

/// Stores the allocation under its content hash and links the genesis to it.
pub fn write_genesis_alloc<D>(
    database: &D,
    genesis_hash: &Bytes32,
    alloc: &GenesisAlloc,
) -> Result<Bytes32, Error>
where
    D: GenesisDatabase + ?Sized,
{
    let content_hash = alloc.derive_hash();
    let blob = alloc.to_blob().map_err(anyhow::Error::new)?;
    database.write_genesis_alloc_blob(&content_hash, &blob)?;
    database.write_genesis_alloc_link(genesis_hash, &content_hash)?;
    Ok(content_hash)
}

/// Reads the allocation the genesis was committed with.
pub fn read_genesis_alloc<D>(
    database: &D,
    genesis_hash: &Bytes32,
) -> Result<Option<GenesisAlloc>, Error>
where
    D: GenesisDatabase + ?Sized,
{
    let Some(content_hash) = database.read_genesis_alloc_link(genesis_hash)? else {
        return Ok(None)
    };
    let blob = database
        .read_genesis_alloc_blob(&content_hash)?
        .ok_or(not_found!("GenesisAlloc"))?;
    let alloc = GenesisAlloc::from_blob(&blob).map_err(anyhow::Error::new)?;
    Ok(Some(alloc))
}
