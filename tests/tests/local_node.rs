use corechain::{
    database::Database,
    service::{
        Config,
        CoreService,
    },
};
use corechain_chain_config::{
    dev_balance,
    Configurator,
    Fork,
    Genesis,
    DEV_CHAIN_ID,
};

#[test]
fn local_node_starts_with_the_prefunded_accounts() {
    let database = Database::in_memory();
    let config = Config::local_node();

    let service = CoreService::new(database.clone(), &config).unwrap();

    assert_eq!(service.chain_config.chain_id(), Some(DEV_CHAIN_ID));
    assert!(service.chain_config.is_enabled(Fork::Eip1559, 0));

    let block = database.block(&service.genesis_hash, 0).unwrap().unwrap();
    let alloc = Genesis::dev().alloc;
    for address in alloc.keys() {
        let account = database
            .account(&block.header().state_root, address)
            .unwrap()
            .unwrap();
        assert_eq!(account.balance, dev_balance());
    }
}

#[test]
fn local_node_refuses_another_chain_in_the_store() {
    let database = Database::in_memory();
    CoreService::new(database.clone(), &Config::default()).unwrap();

    let result = CoreService::new(database, &Config::local_node());

    assert!(result.is_err());
}
