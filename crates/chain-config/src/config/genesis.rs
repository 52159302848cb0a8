//! The genesis specification: the initial state, the header fields of the genesis block
//! and the configuration of the chain.

use crate::{
    commitment::GenesisCommitment,
    config::{
        alloc::GenesisAlloc,
        configurator::{
            ChainConfigurator,
            Configurator,
        },
        fork::Fork,
        network::{
            Network,
            LOCAL_DEV,
        },
    },
    serialization::{
        HexNumber,
        HexType,
    },
};
use corechain_types::{
    blockchain::{
        block::Block,
        header::Header,
    },
    Address,
    Bytes32,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_with::{
    serde_as,
    skip_serializing_none,
};
use std::{
    io::ErrorKind,
    path::PathBuf,
    str::FromStr,
};

/// The difficulty of the genesis block if the specification doesn't set it.
pub const GENESIS_DIFFICULTY: U256 = U256([131_072, 0, 0, 0]);
/// The base fee of the genesis block if the fee market is active from the start.
pub const INITIAL_BASE_FEE: U256 = U256([1_000_000_000, 0, 0, 0]);
/// The gas limit of the genesis block if the specification doesn't set it.
pub const GENESIS_GAS_LIMIT: u64 = 4_712_388;

/// The specification of the genesis block and the chain it starts.
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub config: Option<ChainConfigurator>,
    #[serde(default)]
    #[serde_as(as = "HexNumber")]
    pub nonce: u64,
    #[serde(default)]
    #[serde_as(as = "HexNumber")]
    pub timestamp: u64,
    #[serde(default)]
    #[serde_as(as = "HexType")]
    pub extra_data: Vec<u8>,
    #[serde(default)]
    #[serde_as(as = "HexNumber")]
    pub gas_limit: u64,
    #[serde_as(as = "Option<HexNumber>")]
    pub difficulty: Option<U256>,
    #[serde(default)]
    pub mix_hash: Bytes32,
    #[serde(default)]
    pub coinbase: Address,
    #[serde(default)]
    pub alloc: GenesisAlloc,
    #[serde(rename = "baseFeePerGas")]
    #[serde_as(as = "Option<HexNumber>")]
    pub base_fee: Option<U256>,
}

impl Genesis {
    /// Materializes the genesis block. The state root commits to the allocation,
    /// the missing header fields get their defaults.
    pub fn to_block(&self) -> anyhow::Result<Block> {
        let state_root = Bytes32::from(self.alloc.root()?);
        let fee_market = self
            .config
            .as_ref()
            .map_or(false, |config| config.is_enabled(Fork::Eip1559, 0));

        let header = Header {
            parent_hash: Bytes32::zero(),
            coinbase: self.coinbase,
            state_root,
            transactions_root: Bytes32::zero(),
            number: 0,
            gas_limit: match self.gas_limit {
                0 => GENESIS_GAS_LIMIT,
                gas_limit => gas_limit,
            },
            gas_used: 0,
            timestamp: self.timestamp,
            extra_data: self.extra_data.clone(),
            mix_digest: self.mix_hash,
            nonce: self.nonce,
            difficulty: self.difficulty.unwrap_or(GENESIS_DIFFICULTY),
            base_fee: fee_market.then(|| self.base_fee.unwrap_or(INITIAL_BASE_FEE)),
        };

        Ok(Block::new(header, vec![]))
    }
}

impl FromStr for Genesis {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LOCAL_DEV {
            return Ok(Self::dev())
        }
        if let Ok(network) = Network::from_str(s) {
            return Ok(network.genesis())
        }

        // Attempt to load the genesis specification from path
        let path = PathBuf::from(s.to_string());
        let contents = std::fs::read(path)?;
        serde_json::from_slice(&contents).map_err(|e| {
            std::io::Error::new(
                ErrorKind::InvalidData,
                anyhow::Error::new(e).context(format!(
                    "an error occurred while loading the genesis file {}",
                    s
                )),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        alloc::GenesisAccount,
        configurator::{
            ChainConfig,
            ConfigVariant,
        },
        fork::LONDON,
    };
    use pretty_assertions::assert_eq;
    use std::fs::write;

    #[test]
    fn missing_header_fields_get_defaults() {
        let block = Genesis::default().to_block().unwrap();

        assert_eq!(block.number(), 0);
        assert_eq!(block.difficulty(), GENESIS_DIFFICULTY);
        assert_eq!(block.header().gas_limit, GENESIS_GAS_LIMIT);
        assert_eq!(block.header().parent_hash, Bytes32::zero());
        assert_eq!(block.header().base_fee, None);
    }

    #[test]
    fn base_fee_is_set_only_with_the_fee_market() {
        let london = ChainConfig::default().with_transitions(LONDON, 0);
        let mut genesis = Genesis {
            config: Some(london.into()),
            ..Default::default()
        };
        assert_eq!(
            genesis.to_block().unwrap().header().base_fee,
            Some(INITIAL_BASE_FEE)
        );

        genesis.base_fee = Some(U256::from(7u64));
        assert_eq!(
            genesis.to_block().unwrap().header().base_fee,
            Some(U256::from(7u64))
        );

        genesis.config = Some(ChainConfig::default().into());
        assert_eq!(genesis.to_block().unwrap().header().base_fee, None);
    }

    #[test]
    fn block_hash_follows_the_content() {
        let genesis = Genesis {
            alloc: [(Address::repeat_byte(1), GenesisAccount::with_balance(U256::one()))]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        let hash = genesis.to_block().unwrap().hash();
        assert_eq!(genesis.clone().to_block().unwrap().hash(), hash);

        let mut other = genesis.clone();
        other.timestamp = 1;
        assert_ne!(other.to_block().unwrap().hash(), hash);

        let mut other = genesis;
        other.alloc.clear();
        assert_ne!(other.to_block().unwrap().hash(), hash);
    }

    #[test]
    fn genesis_document_is_read() {
        let json = r#"{
            "config": {"chainId": 5, "homesteadBlock": 0, "clique": {"period": 15, "epoch": 30000}},
            "nonce": "0x0",
            "timestamp": "0x5c51a607",
            "extraData": "0x",
            "gasLimit": "0xa00000",
            "difficulty": "0x1",
            "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "coinbase": "0x0000000000000000000000000000000000000000",
            "alloc": {
                "0x0000000000000000000000000000000000000001": {"balance": "0x1"}
            }
        }"#;

        let genesis: Genesis = serde_json::from_str(json).unwrap();

        assert_eq!(
            genesis.config.as_ref().map(|config| config.variant()),
            Some(ConfigVariant::Ethereum)
        );
        assert_eq!(genesis.timestamp, 0x5c51a607);
        assert_eq!(genesis.gas_limit, 0xa00000);
        assert_eq!(genesis.difficulty, Some(U256::one()));
        assert_eq!(genesis.alloc.len(), 1);
        assert_eq!(genesis.base_fee, None);
    }

    #[test]
    fn genesis_is_loaded_by_network_name() {
        assert_eq!(Genesis::from_str("goerli").unwrap(), Network::Goerli.genesis());
        assert_eq!(
            Genesis::from_str(LOCAL_DEV).unwrap().config,
            Genesis::dev().config
        );
    }

    #[test]
    fn genesis_is_loaded_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        let genesis = Network::Classic.genesis();
        write(&path, serde_json::to_vec(&genesis).unwrap()).unwrap();

        let loaded = Genesis::from_str(path.to_str().unwrap()).unwrap();

        assert_eq!(loaded, genesis);
    }

    #[test]
    fn broken_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        write(&path, b"{").unwrap();

        let err = Genesis::from_str(path.to_str().unwrap()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
