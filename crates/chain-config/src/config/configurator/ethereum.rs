//! The upstream schema. The protocol upgrades are grouped into the named hard forks.

use super::{
    eip150_requirement,
    eip1283_window,
    engine_of,
    CheckpointOracleConfig,
    CliqueConfig,
    ConsensusEngine,
    Configurator,
    EthashConfig,
    TrustedCheckpoint,
};
use crate::config::fork::Fork;
use corechain_types::{
    BlockNumber,
    Bytes32,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_with::skip_serializing_none;
use std::collections::BTreeMap;

/// The chain configuration in the upstream schema. `homesteadBlock` is always written,
/// the current schema has no such key, so a stored record is decoded as this schema again.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EthereumChainConfig {
    pub chain_id: Option<u64>,
    #[serialize_always]
    pub homestead_block: Option<BlockNumber>,
    pub dao_fork_block: Option<BlockNumber>,
    pub dao_fork_support: Option<bool>,
    pub eip150_block: Option<BlockNumber>,
    pub eip150_hash: Option<Bytes32>,
    pub eip155_block: Option<BlockNumber>,
    pub eip158_block: Option<BlockNumber>,
    pub byzantium_block: Option<BlockNumber>,
    pub constantinople_block: Option<BlockNumber>,
    pub petersburg_block: Option<BlockNumber>,
    pub istanbul_block: Option<BlockNumber>,
    /// Only delays the difficulty bomb, no upgrade is bound to it.
    pub muir_glacier_block: Option<BlockNumber>,
    pub berlin_block: Option<BlockNumber>,
    pub london_block: Option<BlockNumber>,
    pub ethash: Option<EthashConfig>,
    pub clique: Option<CliqueConfig>,
    pub trusted_checkpoint: Option<TrustedCheckpoint>,
    pub trusted_checkpoint_oracle: Option<CheckpointOracleConfig>,
}

impl Configurator for EthereumChainConfig {
    fn network_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn transition(&self, fork: Fork) -> Option<BlockNumber> {
        match fork {
            Fork::Eip2 | Fork::Eip7 => self.homestead_block,
            Fork::Eip779 => self
                .dao_fork_block
                .filter(|_| self.dao_fork_support.unwrap_or_default()),
            Fork::Eip150 => self.eip150_block,
            Fork::Eip155 => self.eip155_block,
            Fork::Eip160 | Fork::Eip161 | Fork::Eip170 => self.eip158_block,
            Fork::Eip100
            | Fork::Eip140
            | Fork::Eip198
            | Fork::Eip211
            | Fork::Eip212
            | Fork::Eip213
            | Fork::Eip214
            | Fork::Eip658 => self.byzantium_block,
            Fork::Eip145 | Fork::Eip1014 | Fork::Eip1052 => self.constantinople_block,
            Fork::Eip1283 => {
                eip1283_window(self.constantinople_block, self.petersburg_block).0
            }
            Fork::Eip1283Disable => {
                eip1283_window(self.constantinople_block, self.petersburg_block).1
            }
            Fork::Eip152
            | Fork::Eip1108
            | Fork::Eip1344
            | Fork::Eip1884
            | Fork::Eip2028
            | Fork::Eip2200 => self.istanbul_block,
            Fork::Eip2565 | Fork::Eip2929 | Fork::Eip2930 => self.berlin_block,
            Fork::Eip1559 | Fork::Eip3198 | Fork::Eip3529 | Fork::Eip3541 => {
                self.london_block
            }
            Fork::Ecip1010Pause | Fork::Ecip1017 | Fork::Ecip1041 => None,
        }
    }

    fn engine(&self) -> ConsensusEngine {
        engine_of(self.clique.as_ref())
    }

    fn ecip1010_length(&self) -> Option<u64> {
        None
    }

    fn ecip1017_era_rounds(&self) -> Option<u64> {
        None
    }

    fn trusted_checkpoint(&self) -> Option<&TrustedCheckpoint> {
        self.trusted_checkpoint.as_ref()
    }

    fn checkpoint_oracle(&self) -> Option<&CheckpointOracleConfig> {
        self.trusted_checkpoint_oracle.as_ref()
    }

    fn require_block_hashes(&self) -> BTreeMap<BlockNumber, Bytes32> {
        eip150_requirement(self.eip150_block, self.eip150_hash)
    }
}
