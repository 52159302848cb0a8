use corechain::{
    database::Database,
    service::genesis::setup_genesis_block,
};
use corechain_chain_config::{
    check_compatible,
    diff,
    fork::ISTANBUL,
    resolve,
    ChainConfig,
    ConfigVariant,
    Configurator,
    Genesis,
    Network,
};
use corechain_storage::column::Column;
use corechain_types::Bytes32;
use pretty_assertions::assert_eq;
use std::str::FromStr;

/// The classic configuration written by the v1.9.6 era nodes. The upper-case Istanbul
/// keys were always written because of the mistyped field tags.
const CLASSIC_V196: &str = r#"{
  "chainId": 61,
  "homesteadBlock": 1150000,
  "daoForkBlock": 1920000,
  "eip150Block": 2500000,
  "eip150Hash": "0xca12c63534f565899681965528d536c52cb05b7c48e269c2a6cb77ad864d878a",
  "eip155Block": 3000000,
  "eip158Block": 8772000,
  "byzantiumBlock": 8772000,
  "constantinopleBlock": 9573000,
  "petersburgBlock": 9573000,
  "ethash": {},
  "trustedCheckpoint": null,
  "trustedCheckpointOracle": null,
  "networkId": 1,
  "eip7FBlock": null,
  "eip160Block": 3000000,
  "EIP1108FBlock": null,
  "EIP1344FBlock": null,
  "EIP1884FBlock": null,
  "EIP2028FBlock": null,
  "EIP2200FBlock": null,
  "ecip1010PauseBlock": 3000000,
  "ecip1010Length": 2000000,
  "ecip1017EraBlock": 5000000,
  "disposalBlock": 5900000
}
"#;

/// The same chain in the current schema, compacted.
const CLASSIC_V197: &str = concat!(
    r#"{"networkId":1,"chainId":61,"eip2FBlock":1150000,"eip7FBlock":1150000,"#,
    r#""eip150Block":2500000,"eip155Block":3000000,"eip160Block":3000000,"#,
    r#""eip161FBlock":8772000,"eip170FBlock":8772000,"eip100FBlock":8772000,"#,
    r#""eip140FBlock":8772000,"eip198FBlock":8772000,"eip211FBlock":8772000,"#,
    r#""eip212FBlock":8772000,"eip213FBlock":8772000,"eip214FBlock":8772000,"#,
    r#""eip658FBlock":8772000,"eip145FBlock":9573000,"eip1014FBlock":9573000,"#,
    r#""eip1052FBlock":9573000,"eip152FBlock":10500839,"eip1108FBlock":10500839,"#,
    r#""eip1344FBlock":10500839,"eip2028FBlock":10500839,"eip2200FBlock":10500839,"#,
    r#""ecip1010PauseBlock":3000000,"ecip1010Length":2000000,"#,
    r#""ecip1017FBlock":5000000,"ecip1017EraRounds":5000000,"#,
    r#""disposalBlock":5900000,"ethash":{},"trustedCheckpoint":null,"#,
    r#""trustedCheckpointOracle":null,"requireBlockHashes":{"#,
    r#""1920000":"0x94365e3a8c0b35089c1d1195081fe7489b528a84b22199c916180db8b28ade7f","#,
    r#""2500000":"0xca12c63534f565899681965528d536c52cb05b7c48e269c2a6cb77ad864d878a"}}"#,
);

const CLASSIC_HEAD: u64 = 9_700_559;

#[test]
fn legacy_classic_config_is_upgraded_in_place() {
    let database = Database::in_memory();
    let genesis = Genesis::classic();

    let setup = setup_genesis_block(&database, &database, Some(&genesis)).unwrap();
    assert_eq!(setup.hash, Network::Classic.genesis_hash().unwrap());

    // Pretend an older node wrote the configuration and synced the chain.
    database
        .put_raw(
            setup.hash.as_bytes(),
            Column::ChainConfig,
            CLASSIC_V196.as_bytes(),
        )
        .unwrap();
    let stored = resolve(&database.chain_config_raw(&setup.hash).unwrap().unwrap()).unwrap();
    assert_eq!(stored.variant(), ConfigVariant::Legacy);
    database
        .write_head_header(&Bytes32::repeat_byte(0xe6), CLASSIC_HEAD)
        .unwrap();

    let upgraded = setup_genesis_block(&database, &database, Some(&genesis)).unwrap();

    assert_eq!(upgraded.hash, setup.hash);
    assert_eq!(upgraded.config.variant(), ConfigVariant::Modern);
    let written = database.chain_config_raw(&setup.hash).unwrap().unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), CLASSIC_V197);
}

#[test]
fn legacy_record_reads_like_the_modern_one() {
    let legacy = resolve(CLASSIC_V196.as_bytes()).unwrap();
    let mut modern = ChainConfig::classic();
    for fork in ISTANBUL {
        modern.set_transition(*fork, None);
    }

    assert_eq!(diff(&legacy, &modern), vec![]);
    assert_eq!(legacy.network_id(), Some(1));
    assert_eq!(legacy.ecip1017_era_rounds(), Some(5_000_000));
    assert_eq!(
        legacy.require_block_hashes().get(&2_500_000),
        modern.require_block_hashes().get(&2_500_000)
    );
}

#[test]
fn upcoming_upgrade_is_compatible_with_the_legacy_record() {
    let legacy = resolve(CLASSIC_V196.as_bytes()).unwrap();

    assert_eq!(
        check_compatible(&legacy, &ChainConfig::classic(), CLASSIC_HEAD),
        Ok(())
    );
    assert!(check_compatible(&legacy, &ChainConfig::classic(), 10_500_839).is_err());
}

#[test]
fn modern_record_is_resolved_as_modern() {
    let resolved = resolve(CLASSIC_V197.as_bytes()).unwrap();

    assert_eq!(resolved, ChainConfig::classic().into());
}

#[test]
fn genesis_document_from_file_is_set_up() {
    let database = Database::in_memory();
    let genesis = Genesis::from_str("goerli").unwrap();

    let setup = setup_genesis_block(&database, &database, Some(&genesis)).unwrap();

    assert_eq!(setup.hash, Network::Goerli.genesis_hash().unwrap());
    assert_eq!(setup.config, ChainConfig::goerli().into());
}
