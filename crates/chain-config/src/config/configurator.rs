//! The chain configurator answers which protocol upgrades are active at a height and
//! which network and consensus parameters the chain uses. The stored configuration can be
//! written by different versions of the node, so several schemas are supported.

use crate::config::{
    fork::Fork,
    resolver,
};
use corechain_types::{
    Address,
    BlockNumber,
    Bytes32,
};
use enum_dispatch::enum_dispatch;
use serde::{
    de::Error as _,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::collections::BTreeMap;

pub mod ethereum;
pub mod legacy;
pub mod modern;

pub use ethereum::EthereumChainConfig;
pub use legacy::LegacyChainConfig;
pub use modern::ChainConfig;

/// The per-upgrade view of the chain configuration.
#[enum_dispatch]
pub trait Configurator {
    /// The identifier of the network used by the peer-to-peer layer.
    fn network_id(&self) -> Option<u64>;

    /// The identifier of the chain used for the replay protection.
    fn chain_id(&self) -> Option<u64>;

    /// The activation height of the `fork`, `None` if it is never activated.
    fn transition(&self, fork: Fork) -> Option<BlockNumber>;

    /// Returns `true` if the `fork` is active at the block `number`.
    fn is_enabled(&self, fork: Fork, number: BlockNumber) -> bool {
        self.transition(fork)
            .map_or(false, |activation| activation <= number)
    }

    /// The consensus engine of the chain.
    fn engine(&self) -> ConsensusEngine;

    /// The length of the difficulty bomb pause.
    fn ecip1010_length(&self) -> Option<u64>;

    /// The number of blocks in one era of the monetary policy.
    fn ecip1017_era_rounds(&self) -> Option<u64>;

    /// The checkpoint used by the light clients.
    fn trusted_checkpoint(&self) -> Option<&TrustedCheckpoint>;

    /// The contract which publishes the checkpoints.
    fn checkpoint_oracle(&self) -> Option<&CheckpointOracleConfig>;

    /// The hashes the blocks at the heights must have to be accepted.
    fn require_block_hashes(&self) -> BTreeMap<BlockNumber, Bytes32>;
}

/// The chain configuration in one of the supported schemas.
#[enum_dispatch(Configurator)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainConfigurator {
    /// The current schema with one field per protocol upgrade.
    Modern(ChainConfig),
    /// The schema written by the multi-geth v1.9.6 era nodes.
    Legacy(LegacyChainConfig),
    /// The upstream schema with the hard fork names.
    Ethereum(EthereumChainConfig),
}

/// The schema of the decoded [`ChainConfigurator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum ConfigVariant {
    /// See [`ChainConfigurator::Modern`].
    Modern,
    /// See [`ChainConfigurator::Legacy`].
    Legacy,
    /// See [`ChainConfigurator::Ethereum`].
    Ethereum,
}

impl ChainConfigurator {
    /// Returns the schema of the configuration.
    pub fn variant(&self) -> ConfigVariant {
        match self {
            ChainConfigurator::Modern(_) => ConfigVariant::Modern,
            ChainConfigurator::Legacy(_) => ConfigVariant::Legacy,
            ChainConfigurator::Ethereum(_) => ConfigVariant::Ethereum,
        }
    }

    /// Encodes the configuration into the compact JSON document of its schema.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl Serialize for ChainConfigurator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ChainConfigurator::Modern(config) => config.serialize(serializer),
            ChainConfigurator::Legacy(config) => config.serialize(serializer),
            ChainConfigurator::Ethereum(config) => config.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ChainConfigurator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        resolver::resolve_value(&value).map_err(D::Error::custom)
    }
}

/// The consensus engine with its parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConsensusEngine {
    /// Proof of work.
    Ethash,
    /// Proof of authority with the rotating signers.
    Clique(CliqueConfig),
}

impl ConsensusEngine {
    /// Returns the kind of the engine without its parameters.
    pub fn kind(&self) -> EngineKind {
        match self {
            ConsensusEngine::Ethash => EngineKind::Ethash,
            ConsensusEngine::Clique(_) => EngineKind::Clique,
        }
    }
}

/// The kind of the consensus engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EngineKind {
    /// See [`ConsensusEngine::Ethash`].
    Ethash,
    /// See [`ConsensusEngine::Clique`].
    Clique,
}

/// The proof-of-work engine has no parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthashConfig {}

/// The parameters of the proof-of-authority engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueConfig {
    /// The number of seconds between the blocks.
    pub period: u64,
    /// The number of blocks after which the votes are reset.
    pub epoch: u64,
}

/// The checkpoint of the light client protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedCheckpoint {
    pub section_index: u64,
    pub section_head: Bytes32,
    pub cht_root: Bytes32,
    pub bloom_root: Bytes32,
}

/// The on-chain oracle of the light client checkpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointOracleConfig {
    pub address: Address,
    pub signers: Vec<Address>,
    pub threshold: u64,
}

/// Returns the engine selected by the optional engine sections of a schema.
/// The proof of authority wins if both are present.
pub(crate) fn engine_of(clique: Option<&CliqueConfig>) -> ConsensusEngine {
    match clique {
        Some(clique) => ConsensusEngine::Clique(*clique),
        None => ConsensusEngine::Ethash,
    }
}

/// Returns the earliest of two optional activations.
pub(crate) fn min_block(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Returns the activation and the deactivation of the net gas metering.
/// The metering is active only if Petersburg comes after Constantinople,
/// a missing Petersburg means it comes with Constantinople.
pub(crate) fn eip1283_window(
    constantinople: Option<u64>,
    petersburg: Option<u64>,
) -> (Option<u64>, Option<u64>) {
    match (constantinople, petersburg.or(constantinople)) {
        (Some(constantinople), Some(petersburg)) if petersburg > constantinople => {
            (Some(constantinople), Some(petersburg))
        }
        _ => (None, None),
    }
}

/// Returns the required hash of the Tangerine Whistle block if both parts are known.
pub(crate) fn eip150_requirement(
    block: Option<u64>,
    hash: Option<Bytes32>,
) -> BTreeMap<BlockNumber, Bytes32> {
    block.zip(hash).into_iter().collect()
}
