//! The schema written by the multi-geth v1.9.6 era nodes. It mixes the hard fork fields
//! with the per-upgrade fields, so the activation of an upgrade is the earliest of them.
//! The Istanbul upgrade fields carry upper-case keys and are always written.

use super::{
    eip150_requirement,
    eip1283_window,
    engine_of,
    min_block,
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

/// The chain configuration in the legacy schema. Unknown keys are ignored.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyChainConfig {
    pub chain_id: Option<u64>,
    pub homestead_block: Option<BlockNumber>,
    pub dao_fork_block: Option<BlockNumber>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dao_fork_support: bool,
    pub eip150_block: Option<BlockNumber>,
    pub eip150_hash: Option<Bytes32>,
    pub eip155_block: Option<BlockNumber>,
    pub eip158_block: Option<BlockNumber>,
    pub byzantium_block: Option<BlockNumber>,
    pub constantinople_block: Option<BlockNumber>,
    pub petersburg_block: Option<BlockNumber>,
    pub istanbul_block: Option<BlockNumber>,
    pub ethash: Option<EthashConfig>,
    pub clique: Option<CliqueConfig>,
    #[serialize_always]
    pub trusted_checkpoint: Option<TrustedCheckpoint>,
    #[serialize_always]
    pub trusted_checkpoint_oracle: Option<CheckpointOracleConfig>,

    pub network_id: Option<u64>,
    #[serde(rename = "eip7FBlock")]
    pub eip7_f_block: Option<BlockNumber>,
    pub eip160_block: Option<BlockNumber>,
    #[serde(rename = "eip161FBlock")]
    pub eip161_f_block: Option<BlockNumber>,
    #[serde(rename = "eip170FBlock")]
    pub eip170_f_block: Option<BlockNumber>,
    #[serde(rename = "eip100FBlock")]
    pub eip100_f_block: Option<BlockNumber>,
    #[serde(rename = "eip140FBlock")]
    pub eip140_f_block: Option<BlockNumber>,
    #[serde(rename = "eip198FBlock")]
    pub eip198_f_block: Option<BlockNumber>,
    #[serde(rename = "eip211FBlock")]
    pub eip211_f_block: Option<BlockNumber>,
    #[serde(rename = "eip212FBlock")]
    pub eip212_f_block: Option<BlockNumber>,
    #[serde(rename = "eip213FBlock")]
    pub eip213_f_block: Option<BlockNumber>,
    #[serde(rename = "eip214FBlock")]
    pub eip214_f_block: Option<BlockNumber>,
    #[serde(rename = "eip658FBlock")]
    pub eip658_f_block: Option<BlockNumber>,
    #[serde(rename = "eip145FBlock")]
    pub eip145_f_block: Option<BlockNumber>,
    #[serde(rename = "eip1014FBlock")]
    pub eip1014_f_block: Option<BlockNumber>,
    #[serde(rename = "eip1052FBlock")]
    pub eip1052_f_block: Option<BlockNumber>,
    #[serde(rename = "eip1283FBlock")]
    pub eip1283_f_block: Option<BlockNumber>,
    #[serde(rename = "eip152FBlock")]
    pub eip152_f_block: Option<BlockNumber>,
    #[serialize_always]
    #[serde(rename = "EIP1108FBlock")]
    pub eip1108_f_block: Option<BlockNumber>,
    #[serialize_always]
    #[serde(rename = "EIP1344FBlock")]
    pub eip1344_f_block: Option<BlockNumber>,
    #[serialize_always]
    #[serde(rename = "EIP1884FBlock")]
    pub eip1884_f_block: Option<BlockNumber>,
    #[serialize_always]
    #[serde(rename = "EIP2028FBlock")]
    pub eip2028_f_block: Option<BlockNumber>,
    #[serialize_always]
    #[serde(rename = "EIP2200FBlock")]
    pub eip2200_f_block: Option<BlockNumber>,

    pub ecip1010_pause_block: Option<BlockNumber>,
    pub ecip1010_length: Option<u64>,
    pub ecip1017_era_block: Option<BlockNumber>,
    pub disposal_block: Option<BlockNumber>,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl LegacyChainConfig {
    fn dao_fork(&self) -> Option<BlockNumber> {
        self.dao_fork_block.filter(|_| self.dao_fork_support)
    }

    fn byzantium(&self, explicit: Option<BlockNumber>) -> Option<BlockNumber> {
        min_block(self.byzantium_block, explicit)
    }

    fn constantinople(&self, explicit: Option<BlockNumber>) -> Option<BlockNumber> {
        min_block(self.constantinople_block, explicit)
    }

    fn istanbul(&self, explicit: Option<BlockNumber>) -> Option<BlockNumber> {
        min_block(self.istanbul_block, explicit)
    }

    fn net_gas_metering(&self) -> (Option<BlockNumber>, Option<BlockNumber>) {
        eip1283_window(
            self.constantinople(self.eip1283_f_block),
            self.petersburg_block,
        )
    }
}

impl Configurator for LegacyChainConfig {
    fn network_id(&self) -> Option<u64> {
        self.network_id.or(self.chain_id)
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn transition(&self, fork: Fork) -> Option<BlockNumber> {
        match fork {
            Fork::Eip2 => self.homestead_block,
            Fork::Eip7 => min_block(self.homestead_block, self.eip7_f_block),
            Fork::Eip779 => self.dao_fork(),
            Fork::Eip150 => self.eip150_block,
            Fork::Eip155 => self.eip155_block,
            Fork::Eip160 => min_block(self.eip158_block, self.eip160_block),
            Fork::Eip161 => min_block(self.eip158_block, self.eip161_f_block),
            Fork::Eip170 => min_block(self.eip158_block, self.eip170_f_block),
            Fork::Eip100 => self.byzantium(self.eip100_f_block),
            Fork::Eip140 => self.byzantium(self.eip140_f_block),
            Fork::Eip198 => self.byzantium(self.eip198_f_block),
            Fork::Eip211 => self.byzantium(self.eip211_f_block),
            Fork::Eip212 => self.byzantium(self.eip212_f_block),
            Fork::Eip213 => self.byzantium(self.eip213_f_block),
            Fork::Eip214 => self.byzantium(self.eip214_f_block),
            Fork::Eip658 => self.byzantium(self.eip658_f_block),
            Fork::Eip145 => self.constantinople(self.eip145_f_block),
            Fork::Eip1014 => self.constantinople(self.eip1014_f_block),
            Fork::Eip1052 => self.constantinople(self.eip1052_f_block),
            Fork::Eip1283 => self.net_gas_metering().0,
            Fork::Eip1283Disable => self.net_gas_metering().1,
            Fork::Eip152 => self.istanbul(self.eip152_f_block),
            Fork::Eip1108 => self.istanbul(self.eip1108_f_block),
            Fork::Eip1344 => self.istanbul(self.eip1344_f_block),
            Fork::Eip1884 => self.istanbul(self.eip1884_f_block),
            Fork::Eip2028 => self.istanbul(self.eip2028_f_block),
            Fork::Eip2200 => self.istanbul(self.eip2200_f_block),
            Fork::Eip2565
            | Fork::Eip2929
            | Fork::Eip2930
            | Fork::Eip1559
            | Fork::Eip3198
            | Fork::Eip3529
            | Fork::Eip3541 => None,
            Fork::Ecip1010Pause => self.ecip1010_pause_block,
            Fork::Ecip1017 => self.ecip1017_era_block,
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
        self.ecip1017_era_block
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dao_fork_requires_the_support_flag() {
        let mut config = LegacyChainConfig {
            dao_fork_block: Some(1_920_000),
            ..Default::default()
        };
        assert_eq!(config.transition(Fork::Eip779), None);

        config.dao_fork_support = true;
        assert_eq!(config.transition(Fork::Eip779), Some(1_920_000));
    }

    #[test]
    fn explicit_upgrade_fields_can_activate_earlier() {
        let config = LegacyChainConfig {
            eip158_block: Some(8_772_000),
            eip160_block: Some(3_000_000),
            istanbul_block: Some(10_000_000),
            eip1108_f_block: Some(9_000_000),
            ..Default::default()
        };

        assert_eq!(config.transition(Fork::Eip160), Some(3_000_000));
        assert_eq!(config.transition(Fork::Eip161), Some(8_772_000));
        assert_eq!(config.transition(Fork::Eip1108), Some(9_000_000));
        assert_eq!(config.transition(Fork::Eip1884), Some(10_000_000));
    }

    #[test]
    fn era_block_is_both_the_activation_and_the_era_length() {
        let config = LegacyChainConfig {
            ecip1017_era_block: Some(5_000_000),
            ..Default::default()
        };

        assert_eq!(config.transition(Fork::Ecip1017), Some(5_000_000));
        assert_eq!(config.ecip1017_era_rounds(), Some(5_000_000));
    }

    #[test]
    fn upper_case_istanbul_keys_are_written_even_when_empty() {
        let json = serde_json::to_value(LegacyChainConfig::default()).unwrap();

        assert_eq!(json["EIP1108FBlock"], serde_json::Value::Null);
        assert!(json.as_object().unwrap().contains_key("EIP2200FBlock"));
        assert!(!json.as_object().unwrap().contains_key("eip152FBlock"));
    }
}
