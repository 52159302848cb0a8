//! The current schema of the chain configuration. Every protocol upgrade has its own
//! activation field, so the chains can combine the upgrades freely.

use super::{
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

/// The chain configuration in the current schema.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    #[serde(rename = "networkId")]
    pub network_id: Option<u64>,
    #[serde(rename = "chainId")]
    pub chain_id: Option<u64>,

    #[serde(rename = "eip2FBlock")]
    pub eip2_block: Option<BlockNumber>,
    #[serde(rename = "eip7FBlock")]
    pub eip7_block: Option<BlockNumber>,
    #[serde(rename = "eip779FBlock")]
    pub eip779_block: Option<BlockNumber>,
    #[serde(rename = "eip150Block")]
    pub eip150_block: Option<BlockNumber>,
    #[serde(rename = "eip155Block")]
    pub eip155_block: Option<BlockNumber>,
    #[serde(rename = "eip160Block")]
    pub eip160_block: Option<BlockNumber>,
    #[serde(rename = "eip161FBlock")]
    pub eip161_block: Option<BlockNumber>,
    #[serde(rename = "eip170FBlock")]
    pub eip170_block: Option<BlockNumber>,

    #[serde(rename = "eip100FBlock")]
    pub eip100_block: Option<BlockNumber>,
    #[serde(rename = "eip140FBlock")]
    pub eip140_block: Option<BlockNumber>,
    #[serde(rename = "eip198FBlock")]
    pub eip198_block: Option<BlockNumber>,
    #[serde(rename = "eip211FBlock")]
    pub eip211_block: Option<BlockNumber>,
    #[serde(rename = "eip212FBlock")]
    pub eip212_block: Option<BlockNumber>,
    #[serde(rename = "eip213FBlock")]
    pub eip213_block: Option<BlockNumber>,
    #[serde(rename = "eip214FBlock")]
    pub eip214_block: Option<BlockNumber>,
    #[serde(rename = "eip658FBlock")]
    pub eip658_block: Option<BlockNumber>,

    #[serde(rename = "eip145FBlock")]
    pub eip145_block: Option<BlockNumber>,
    #[serde(rename = "eip1014FBlock")]
    pub eip1014_block: Option<BlockNumber>,
    #[serde(rename = "eip1052FBlock")]
    pub eip1052_block: Option<BlockNumber>,
    #[serde(rename = "eip1283FBlock")]
    pub eip1283_block: Option<BlockNumber>,
    #[serde(rename = "eip1283DisableFBlock")]
    pub eip1283_disable_block: Option<BlockNumber>,

    #[serde(rename = "eip152FBlock")]
    pub eip152_block: Option<BlockNumber>,
    #[serde(rename = "eip1108FBlock")]
    pub eip1108_block: Option<BlockNumber>,
    #[serde(rename = "eip1344FBlock")]
    pub eip1344_block: Option<BlockNumber>,
    #[serde(rename = "eip1884FBlock")]
    pub eip1884_block: Option<BlockNumber>,
    #[serde(rename = "eip2028FBlock")]
    pub eip2028_block: Option<BlockNumber>,
    #[serde(rename = "eip2200FBlock")]
    pub eip2200_block: Option<BlockNumber>,

    #[serde(rename = "eip2565FBlock")]
    pub eip2565_block: Option<BlockNumber>,
    #[serde(rename = "eip2929FBlock")]
    pub eip2929_block: Option<BlockNumber>,
    #[serde(rename = "eip2930FBlock")]
    pub eip2930_block: Option<BlockNumber>,

    #[serde(rename = "eip1559FBlock")]
    pub eip1559_block: Option<BlockNumber>,
    #[serde(rename = "eip3198FBlock")]
    pub eip3198_block: Option<BlockNumber>,
    #[serde(rename = "eip3529FBlock")]
    pub eip3529_block: Option<BlockNumber>,
    #[serde(rename = "eip3541FBlock")]
    pub eip3541_block: Option<BlockNumber>,

    #[serde(rename = "ecip1010PauseBlock")]
    pub ecip1010_pause_block: Option<BlockNumber>,
    #[serde(rename = "ecip1010Length")]
    pub ecip1010_length: Option<u64>,
    #[serde(rename = "ecip1017FBlock")]
    pub ecip1017_block: Option<BlockNumber>,
    #[serde(rename = "ecip1017EraRounds")]
    pub ecip1017_era_rounds: Option<u64>,
    #[serde(rename = "disposalBlock")]
    pub disposal_block: Option<BlockNumber>,

    pub ethash: Option<EthashConfig>,
    pub clique: Option<CliqueConfig>,

    #[serialize_always]
    #[serde(rename = "trustedCheckpoint")]
    pub trusted_checkpoint: Option<TrustedCheckpoint>,
    #[serialize_always]
    #[serde(rename = "trustedCheckpointOracle")]
    pub trusted_checkpoint_oracle: Option<CheckpointOracleConfig>,

    #[serde(
        rename = "requireBlockHashes",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub require_block_hashes: BTreeMap<BlockNumber, Bytes32>,
}

impl ChainConfig {
    fn transition_mut(&mut self, fork: Fork) -> &mut Option<BlockNumber> {
        match fork {
            Fork::Eip2 => &mut self.eip2_block,
            Fork::Eip7 => &mut self.eip7_block,
            Fork::Eip779 => &mut self.eip779_block,
            Fork::Eip150 => &mut self.eip150_block,
            Fork::Eip155 => &mut self.eip155_block,
            Fork::Eip160 => &mut self.eip160_block,
            Fork::Eip161 => &mut self.eip161_block,
            Fork::Eip170 => &mut self.eip170_block,
            Fork::Eip100 => &mut self.eip100_block,
            Fork::Eip140 => &mut self.eip140_block,
            Fork::Eip198 => &mut self.eip198_block,
            Fork::Eip211 => &mut self.eip211_block,
            Fork::Eip212 => &mut self.eip212_block,
            Fork::Eip213 => &mut self.eip213_block,
            Fork::Eip214 => &mut self.eip214_block,
            Fork::Eip658 => &mut self.eip658_block,
            Fork::Eip145 => &mut self.eip145_block,
            Fork::Eip1014 => &mut self.eip1014_block,
            Fork::Eip1052 => &mut self.eip1052_block,
            Fork::Eip1283 => &mut self.eip1283_block,
            Fork::Eip1283Disable => &mut self.eip1283_disable_block,
            Fork::Eip152 => &mut self.eip152_block,
            Fork::Eip1108 => &mut self.eip1108_block,
            Fork::Eip1344 => &mut self.eip1344_block,
            Fork::Eip1884 => &mut self.eip1884_block,
            Fork::Eip2028 => &mut self.eip2028_block,
            Fork::Eip2200 => &mut self.eip2200_block,
            Fork::Eip2565 => &mut self.eip2565_block,
            Fork::Eip2929 => &mut self.eip2929_block,
            Fork::Eip2930 => &mut self.eip2930_block,
            Fork::Eip1559 => &mut self.eip1559_block,
            Fork::Eip3198 => &mut self.eip3198_block,
            Fork::Eip3529 => &mut self.eip3529_block,
            Fork::Eip3541 => &mut self.eip3541_block,
            Fork::Ecip1010Pause => &mut self.ecip1010_pause_block,
            Fork::Ecip1017 => &mut self.ecip1017_block,
            Fork::Ecip1041 => &mut self.disposal_block,
        }
    }

    /// Sets the activation height of the `fork`.
    pub fn set_transition(&mut self, fork: Fork, block: Option<BlockNumber>) {
        *self.transition_mut(fork) = block;
    }

    /// Activates all `forks` at the `block`.
    pub fn with_transitions(mut self, forks: &[Fork], block: BlockNumber) -> Self {
        for fork in forks {
            self.set_transition(*fork, Some(block));
        }
        self
    }
}

impl Configurator for ChainConfig {
    fn network_id(&self) -> Option<u64> {
        self.network_id
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn transition(&self, fork: Fork) -> Option<BlockNumber> {
        match fork {
            Fork::Eip2 => self.eip2_block,
            Fork::Eip7 => self.eip7_block,
            Fork::Eip779 => self.eip779_block,
            Fork::Eip150 => self.eip150_block,
            Fork::Eip155 => self.eip155_block,
            Fork::Eip160 => self.eip160_block,
            Fork::Eip161 => self.eip161_block,
            Fork::Eip170 => self.eip170_block,
            Fork::Eip100 => self.eip100_block,
            Fork::Eip140 => self.eip140_block,
            Fork::Eip198 => self.eip198_block,
            Fork::Eip211 => self.eip211_block,
            Fork::Eip212 => self.eip212_block,
            Fork::Eip213 => self.eip213_block,
            Fork::Eip214 => self.eip214_block,
            Fork::Eip658 => self.eip658_block,
            Fork::Eip145 => self.eip145_block,
            Fork::Eip1014 => self.eip1014_block,
            Fork::Eip1052 => self.eip1052_block,
            Fork::Eip1283 => self.eip1283_block,
            Fork::Eip1283Disable => self.eip1283_disable_block,
            Fork::Eip152 => self.eip152_block,
            Fork::Eip1108 => self.eip1108_block,
            Fork::Eip1344 => self.eip1344_block,
            Fork::Eip1884 => self.eip1884_block,
            Fork::Eip2028 => self.eip2028_block,
            Fork::Eip2200 => self.eip2200_block,
            Fork::Eip2565 => self.eip2565_block,
            Fork::Eip2929 => self.eip2929_block,
            Fork::Eip2930 => self.eip2930_block,
            Fork::Eip1559 => self.eip1559_block,
            Fork::Eip3198 => self.eip3198_block,
            Fork::Eip3529 => self.eip3529_block,
            Fork::Eip3541 => self.eip3541_block,
            Fork::Ecip1010Pause => self.ecip1010_pause_block,
            Fork::Ecip1017 => self.ecip1017_block,
            Fork::Ecip1041 => self.disposal_block,
        }
    }

    fn engine(&self) -> ConsensusEngine {
        engine_of(self.clique.as_ref())
    }

    fn ecip1010_length(&self) -> Option<u64> {
        self.ecip1010_length
    }

    fn ecip1017_era_rounds(&self) -> Option<u64> {
        self.ecip1017_era_rounds
    }

    fn trusted_checkpoint(&self) -> Option<&TrustedCheckpoint> {
        self.trusted_checkpoint.as_ref()
    }

    fn checkpoint_oracle(&self) -> Option<&CheckpointOracleConfig> {
        self.trusted_checkpoint_oracle.as_ref()
    }

    fn require_block_hashes(&self) -> BTreeMap<BlockNumber, Bytes32> {
        self.require_block_hashes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fork_has_its_own_field() {
        for (block, fork) in enum_iterator::all::<Fork>().enumerate() {
            let mut config = ChainConfig::default();
            config.set_transition(fork, Some(block as u64));

            assert_eq!(config.transition(fork), Some(block as u64));
            let others = enum_iterator::all::<Fork>()
                .filter(|other| *other != fork)
                .filter_map(|other| config.transition(other))
                .count();
            assert_eq!(others, 0, "{fork} shares the field with another fork");
        }
    }

    #[test]
    fn empty_config_keeps_the_checkpoint_keys() {
        let json = serde_json::to_string(&ChainConfig::default()).unwrap();

        assert_eq!(
            json,
            r#"{"trustedCheckpoint":null,"trustedCheckpointOracle":null}"#
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = serde_json::from_str::<ChainConfig>(r#"{"homesteadBlock": 1}"#);

        assert!(result.is_err());
    }
}
