//! The well-known networks and the development chain.

use crate::config::{
    alloc::{
        GenesisAccount,
        GenesisAlloc,
    },
    clique,
    configurator::{
        ChainConfig,
        ChainConfigurator,
        CliqueConfig,
        EthashConfig,
    },
    fork::{
        Fork,
        BERLIN,
        BYZANTIUM,
        CONSTANTINOPLE,
        HOMESTEAD,
        ISTANBUL,
        LONDON,
        SPURIOUS_DRAGON,
        TANGERINE_WHISTLE,
    },
    genesis::Genesis,
};
use corechain_types::{
    Address,
    Bytes32,
    U256,
};
use rand::{
    rngs::StdRng,
    RngCore,
    SeedableRng,
};

/// The name of the development chain.
pub const LOCAL_DEV: &str = "dev";
/// The chain id of the development chain.
pub const DEV_CHAIN_ID: u64 = 1337;
/// The number of the prefunded accounts of the development chain.
pub const DEV_ACCOUNTS: u64 = 5;

const MAINNET_EXTRA_DATA: [u8; 32] = [
    0x11, 0xbb, 0xe8, 0xdb, 0x4e, 0x34, 0x7b, 0x4e, 0x8c, 0x93, 0x7c, 0x1c, 0x83, 0x70,
    0xe4, 0xb5, 0xed, 0x33, 0xad, 0xb3, 0xdb, 0x69, 0xcb, 0xdb, 0x7a, 0x38, 0xe1, 0xe5,
    0x0b, 0x1b, 0x82, 0xfa,
];

const GOERLI_SIGNER: [u8; 20] = [
    0xe0, 0xa2, 0xbd, 0x42, 0x58, 0xd2, 0x76, 0x88, 0x37, 0xba, 0xa2, 0x6a, 0x28, 0xfe,
    0x71, 0xdc, 0x07, 0x9f, 0x84, 0xc7,
];

const CLASSIC_DAO_BLOCK_HASH: [u8; 32] = [
    0x94, 0x36, 0x5e, 0x3a, 0x8c, 0x0b, 0x35, 0x08, 0x9c, 0x1d, 0x11, 0x95, 0x08, 0x1f,
    0xe7, 0x48, 0x9b, 0x52, 0x8a, 0x84, 0xb2, 0x21, 0x99, 0xc9, 0x16, 0x18, 0x0d, 0xb8,
    0xb2, 0x8a, 0xde, 0x7f,
];

const CLASSIC_EIP150_BLOCK_HASH: [u8; 32] = [
    0xca, 0x12, 0xc6, 0x35, 0x34, 0xf5, 0x65, 0x89, 0x96, 0x81, 0x96, 0x55, 0x28, 0xd5,
    0x36, 0xc5, 0x2c, 0xb0, 0x5b, 0x7c, 0x48, 0xe2, 0x69, 0xc2, 0xa6, 0xcb, 0x77, 0xad,
    0x86, 0x4d, 0x87, 0x8a,
];

/// The networks with the built-in genesis.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    enum_iterator::Sequence,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Network {
    /// The Ethereum main network.
    Mainnet,
    /// The Ethereum Classic main network.
    Classic,
    /// The proof-of-authority test network.
    Goerli,
}

impl Network {
    /// Returns the chain configuration of the network.
    pub fn chain_config(&self) -> ChainConfig {
        match self {
            Network::Mainnet => ChainConfig::mainnet(),
            Network::Classic => ChainConfig::classic(),
            Network::Goerli => ChainConfig::goerli(),
        }
    }

    /// Returns the genesis specification of the network.
    pub fn genesis(&self) -> Genesis {
        match self {
            Network::Mainnet => Genesis::mainnet(),
            Network::Classic => Genesis::classic(),
            Network::Goerli => Genesis::goerli(),
        }
    }

    /// Calculates the hash of the genesis block of the network.
    pub fn genesis_hash(&self) -> anyhow::Result<Bytes32> {
        Ok(self.genesis().to_block()?.hash())
    }

    /// Finds the network with the genesis `hash`. Returns `None` if no network or
    /// more than one network starts from this genesis.
    pub fn from_genesis_hash(hash: &Bytes32) -> anyhow::Result<Option<Network>> {
        let mut found = None;
        for network in enum_iterator::all::<Network>() {
            if network.genesis_hash()? != *hash {
                continue
            }
            if found.is_some() {
                return Ok(None)
            }
            found = Some(network);
        }
        Ok(found)
    }
}

impl ChainConfig {
    /// The Ethereum main network.
    pub fn mainnet() -> Self {
        ChainConfig {
            network_id: Some(1),
            chain_id: Some(1),
            ethash: Some(EthashConfig {}),
            ..Default::default()
        }
        .with_transitions(HOMESTEAD, 1_150_000)
        .with_transitions(&[Fork::Eip779], 1_920_000)
        .with_transitions(TANGERINE_WHISTLE, 2_463_000)
        .with_transitions(SPURIOUS_DRAGON, 2_675_000)
        .with_transitions(BYZANTIUM, 4_370_000)
        .with_transitions(CONSTANTINOPLE, 7_280_000)
        .with_transitions(ISTANBUL, 9_069_000)
        .with_transitions(BERLIN, 12_244_000)
        .with_transitions(LONDON, 12_965_000)
    }

    /// The Ethereum Classic main network. It skipped the DAO fork, delayed parts of
    /// Spurious Dragon and never activated the net gas metering.
    pub fn classic() -> Self {
        let mut config = ChainConfig {
            network_id: Some(1),
            chain_id: Some(61),
            ecip1010_length: Some(2_000_000),
            ecip1017_era_rounds: Some(5_000_000),
            ethash: Some(EthashConfig {}),
            require_block_hashes: [
                (1_920_000, Bytes32::from(CLASSIC_DAO_BLOCK_HASH)),
                (2_500_000, Bytes32::from(CLASSIC_EIP150_BLOCK_HASH)),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        }
        .with_transitions(HOMESTEAD, 1_150_000)
        .with_transitions(TANGERINE_WHISTLE, 2_500_000)
        .with_transitions(&[Fork::Eip155, Fork::Eip160], 3_000_000)
        .with_transitions(&[Fork::Eip161, Fork::Eip170], 8_772_000)
        .with_transitions(BYZANTIUM, 8_772_000)
        .with_transitions(CONSTANTINOPLE, 9_573_000)
        .with_transitions(ISTANBUL, 10_500_839)
        .with_transitions(&[Fork::Ecip1010Pause], 3_000_000)
        .with_transitions(&[Fork::Ecip1017], 5_000_000)
        .with_transitions(&[Fork::Ecip1041], 5_900_000);
        // ETC skipped the trie-size-dependent repricing.
        config.set_transition(Fork::Eip1884, None);
        config
    }

    /// The proof-of-authority test network.
    pub fn goerli() -> Self {
        ChainConfig {
            network_id: Some(5),
            chain_id: Some(5),
            clique: Some(CliqueConfig {
                period: 15,
                epoch: 30_000,
            }),
            ..Default::default()
        }
        .with_transitions(HOMESTEAD, 0)
        .with_transitions(TANGERINE_WHISTLE, 0)
        .with_transitions(SPURIOUS_DRAGON, 0)
        .with_transitions(BYZANTIUM, 0)
        .with_transitions(CONSTANTINOPLE, 0)
        .with_transitions(ISTANBUL, 1_561_651)
        .with_transitions(BERLIN, 4_460_644)
        .with_transitions(LONDON, 5_062_605)
    }

    /// All Ethereum protocol changes active from the genesis with the proof of work.
    pub fn all_ethash_protocol_changes() -> Self {
        ChainConfig {
            network_id: Some(DEV_CHAIN_ID),
            chain_id: Some(DEV_CHAIN_ID),
            ethash: Some(EthashConfig {}),
            ..Default::default()
        }
        .with_transitions(HOMESTEAD, 0)
        .with_transitions(TANGERINE_WHISTLE, 0)
        .with_transitions(SPURIOUS_DRAGON, 0)
        .with_transitions(BYZANTIUM, 0)
        .with_transitions(CONSTANTINOPLE, 0)
        .with_transitions(ISTANBUL, 0)
        .with_transitions(BERLIN, 0)
        .with_transitions(LONDON, 0)
    }
}

impl Genesis {
    /// The genesis of the Ethereum main network.
    pub fn mainnet() -> Self {
        Self {
            config: Some(ChainConfig::mainnet().into()),
            ..Self::frontier()
        }
    }

    /// The genesis of the Ethereum Classic main network. It shares the genesis block
    /// with the Ethereum main network.
    pub fn classic() -> Self {
        Self {
            config: Some(ChainConfig::classic().into()),
            ..Self::frontier()
        }
    }

    /// The genesis of the proof-of-authority test network. The allocation funds
    /// the precompile addresses.
    pub fn goerli() -> Self {
        Self {
            config: Some(ChainConfig::goerli().into()),
            timestamp: 0x5c51a607,
            extra_data: clique::extra_data(&[Address::from(GOERLI_SIGNER)]),
            gas_limit: 0xa00000,
            difficulty: Some(U256::one()),
            alloc: (0..=u8::MAX)
                .map(|byte| {
                    (
                        Address::from_low_u64_be(byte.into()),
                        GenesisAccount::with_balance(U256::one()),
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    /// The genesis of the development chain with the prefunded accounts.
    pub fn dev() -> Self {
        let mut rng = StdRng::seed_from_u64(10);
        let alloc: GenesisAlloc = (0..DEV_ACCOUNTS)
            .map(|_| {
                let mut address = Address::zero();
                rng.fill_bytes(address.as_bytes_mut());
                (address, GenesisAccount::with_balance(dev_balance()))
            })
            .collect();

        Self {
            config: Some(ChainConfig::all_ethash_protocol_changes().into()),
            gas_limit: 11_500_000,
            difficulty: Some(U256::one()),
            alloc,
            ..Default::default()
        }
    }

    /// The header shared by the Ethereum and the Ethereum Classic main networks.
    fn frontier() -> Self {
        Self {
            config: None,
            nonce: 66,
            extra_data: MAINNET_EXTRA_DATA.to_vec(),
            gas_limit: 5000,
            difficulty: Some(U256::from(17_179_869_184u64)),
            ..Default::default()
        }
    }
}

/// The balance of every prefunded development account, 1M ether.
pub fn dev_balance() -> U256 {
    U256::exp10(24)
}

/// The configurator used when the genesis specification doesn't carry one.
pub fn fallback_configurator() -> ChainConfigurator {
    ChainConfig::all_ethash_protocol_changes().into()
}
