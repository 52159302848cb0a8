use crate::helpers::custom_genesis;
use corechain::{
    database::Database,
    service::genesis::{
        commit_genesis,
        must_commit_genesis,
        read_genesis_alloc,
        setup_genesis_block,
        write_genesis_alloc,
        Error,
        GenesisMismatchError,
        GenesisSetup,
    },
};
use corechain_chain_config::{
    diff,
    fallback_configurator,
    ChainConfig,
    ChainConfigurator,
    ConfigCompatError,
    ConfigItem,
    Fork,
    Genesis,
    GenesisAccount,
    GenesisAlloc,
    Network,
    GENESIS_DIFFICULTY,
    INITIAL_BASE_FEE,
};
use corechain_types::{
    Address,
    Bytes32,
    U256,
};
use test_case::test_case;

#[test]
fn default_networks_are_set_up() {
    let database = Database::in_memory();

    let mainnet = Genesis::mainnet();
    let GenesisSetup { config, hash } =
        setup_genesis_block(&database, &database, Some(&mainnet)).unwrap();
    pretty_assertions::assert_eq!(hash, mainnet.to_block().unwrap().hash());
    pretty_assertions::assert_eq!(diff(&config, mainnet.config.as_ref().unwrap()), vec![]);

    // Classic shares the genesis block, so its configuration replaces the stored one.
    let classic = Genesis::classic();
    let GenesisSetup { config, hash } =
        setup_genesis_block(&database, &database, Some(&classic)).unwrap();
    pretty_assertions::assert_eq!(hash, classic.to_block().unwrap().hash());
    pretty_assertions::assert_eq!(diff(&config, classic.config.as_ref().unwrap()), vec![]);
}

#[test]
fn clique_genesis_without_signers_is_invalid() {
    let database = Database::in_memory();
    let mut genesis = Genesis::goerli();
    genesis.extra_data = vec![];

    let result = commit_genesis(&genesis, &database, &database);

    assert!(matches!(result, Err(Error::InvalidCliqueConfig(_))));
}

#[test]
fn genesis_without_config() {
    let database = Database::in_memory();

    let err = setup_genesis_block(&database, &database, Some(&Genesis::default()))
        .unwrap_err();

    assert!(matches!(err.error, Error::NoConfig));
    pretty_assertions::assert_eq!(err.config, Some(fallback_configurator()));
}

#[test]
fn no_block_in_store_and_no_genesis() {
    let database = Database::in_memory();

    let setup = setup_genesis_block(&database, &database, None).unwrap();

    pretty_assertions::assert_eq!(setup.hash, Network::Mainnet.genesis_hash().unwrap());
    pretty_assertions::assert_eq!(setup.config, ChainConfig::mainnet().into());
}

#[test]
fn mainnet_block_in_store_and_no_genesis() {
    let database = Database::in_memory();
    must_commit_genesis(&Genesis::mainnet(), &database, &database);

    let setup = setup_genesis_block(&database, &database, None).unwrap();

    pretty_assertions::assert_eq!(setup.hash, Network::Mainnet.genesis_hash().unwrap());
    pretty_assertions::assert_eq!(setup.config, ChainConfig::mainnet().into());
}

#[test]
fn custom_block_in_store_and_no_genesis() {
    let database = Database::in_memory();
    let custom = custom_genesis(3);
    let custom_hash = must_commit_genesis(&custom, &database, &database).hash();

    let setup = setup_genesis_block(&database, &database, None).unwrap();

    pretty_assertions::assert_eq!(setup.hash, custom_hash);
    pretty_assertions::assert_eq!(Some(setup.config), custom.config);
}

#[test]
fn custom_block_in_store_and_goerli_genesis() {
    let database = Database::in_memory();
    let custom_hash = must_commit_genesis(&custom_genesis(3), &database, &database).hash();
    let goerli_hash = Network::Goerli.genesis_hash().unwrap();

    let err = setup_genesis_block(&database, &database, Some(&Genesis::goerli()))
        .unwrap_err();

    match err.error {
        Error::GenesisMismatch(mismatch) => pretty_assertions::assert_eq!(
            mismatch,
            GenesisMismatchError {
                stored: custom_hash,
                new: goerli_hash,
            }
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    pretty_assertions::assert_eq!(err.hash, Some(goerli_hash));
    pretty_assertions::assert_eq!(err.config, Some(ChainConfig::goerli().into()));
    // The stored chain is untouched.
    assert!(database.block(&custom_hash, 0).unwrap().is_some());
    pretty_assertions::assert_eq!(database.canonical_hash(0).unwrap(), Some(custom_hash));
}

#[test]
fn compatible_config_in_store() {
    let database = Database::in_memory();
    let custom = custom_genesis(3);
    let custom_hash = must_commit_genesis(&custom_genesis(2), &database, &database).hash();

    let setup = setup_genesis_block(&database, &database, Some(&custom)).unwrap();

    pretty_assertions::assert_eq!(setup.hash, custom_hash);
    pretty_assertions::assert_eq!(Some(setup.config), custom.config);
}

#[test]
fn incompatible_config_in_store() {
    let database = Database::in_memory();
    let custom = custom_genesis(3);
    let old_custom = custom_genesis(2);
    let custom_hash = must_commit_genesis(&old_custom, &database, &database).hash();
    let stored_config = database.chain_config_raw(&custom_hash).unwrap();
    // Advance to the block #4, past the Homestead activation of both configurations.
    database
        .write_head_header(&Bytes32::repeat_byte(4), 4)
        .unwrap();

    let err = setup_genesis_block(&database, &database, Some(&custom)).unwrap_err();

    match err.error {
        Error::ConfigCompat(compat) => pretty_assertions::assert_eq!(
            compat,
            ConfigCompatError {
                what: ConfigItem::Fork(Fork::Eip2),
                stored_block: Some(2),
                new_block: Some(3),
                rewind_to_block: 1,
            }
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    pretty_assertions::assert_eq!(err.hash, Some(custom_hash));
    pretty_assertions::assert_eq!(err.config, custom.config);
    pretty_assertions::assert_eq!(database.chain_config_raw(&custom_hash).unwrap(), stored_config);
}

#[test_case(Network::Mainnet)]
#[test_case(Network::Classic)]
#[test_case(Network::Goerli)]
fn default_genesis_blocks_have_well_known_hashes(network: Network) {
    let database = Database::in_memory();

    let block = must_commit_genesis(&network.genesis(), &database, &database);

    pretty_assertions::assert_eq!(block.hash(), network.genesis_hash().unwrap());
}

#[test_case(Network::Mainnet => None)]
#[test_case(Network::Classic => None)]
#[test_case(Network::Goerli => Some(Network::Goerli))]
fn network_is_named_only_by_an_unshared_genesis(network: Network) -> Option<Network> {
    Network::from_genesis_hash(&network.genesis_hash().unwrap()).unwrap()
}

#[test]
fn commit_stores_the_defaulted_difficulty() {
    let database = Database::in_memory();
    let genesis = Genesis {
        base_fee: Some(INITIAL_BASE_FEE),
        config: Some(ChainConfigurator::from(
            ChainConfig::all_ethash_protocol_changes(),
        )),
        ..Default::default()
    };
    pretty_assertions::assert_eq!(genesis.difficulty, None);

    let block = must_commit_genesis(&genesis, &database, &database);

    pretty_assertions::assert_eq!(block.difficulty(), GENESIS_DIFFICULTY);
    pretty_assertions::assert_eq!(
        database.total_difficulty(&block.hash(), block.number()).unwrap(),
        Some(block.difficulty())
    );
}

#[test]
fn genesis_alloc_round_trips_through_the_store() {
    let database = Database::in_memory();
    let alloc: GenesisAlloc = (1..=2u64)
        .map(|i| {
            let mut account = GenesisAccount::with_balance(U256::from(i));
            account
                .storage
                .insert(Bytes32::from_low_u64_be(i), Bytes32::from_low_u64_be(i));
            (Address::from_low_u64_be(i), account)
        })
        .collect();
    let genesis_hash = Bytes32::repeat_byte(0x42);

    let content_hash = write_genesis_alloc(&database, &genesis_hash, &alloc).unwrap();

    pretty_assertions::assert_eq!(content_hash, alloc.derive_hash());
    pretty_assertions::assert_eq!(
        database.genesis_alloc_blob(&content_hash).unwrap(),
        Some(alloc.to_blob().unwrap())
    );
    pretty_assertions::assert_eq!(
        read_genesis_alloc(&database, &genesis_hash).unwrap(),
        Some(alloc)
    );
}
