use corechain_chain_config::{
    Genesis,
    Network,
};

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// The genesis to start the chain from. Without it the node continues the chain
    /// found in the store or starts the main network.
    pub genesis: Option<Genesis>,
}

impl Config {
    /// The development chain with all protocol changes active from the genesis.
    pub fn local_node() -> Self {
        let genesis = Genesis::dev();

        tracing::info!("Initial Accounts");
        for (address, account) in genesis.alloc.iter() {
            tracing::info!("Address({:#x}), Balance({})", address, account.balance);
        }

        Self {
            genesis: Some(genesis),
        }
    }

    pub fn for_network(network: Network) -> Self {
        Self {
            genesis: Some(network.genesis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corechain_chain_config::DEV_ACCOUNTS;
    use std::sync::{
        atomic::{
            AtomicU64,
            Ordering,
        },
        Arc,
    };
    use tracing::{
        span,
        Event,
        Metadata,
        Subscriber,
    };

    struct EventCounter(Arc<AtomicU64>);

    impl Subscriber for EventCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn events_of(f: impl FnOnce()) -> u64 {
        let events = Arc::new(AtomicU64::new(0));
        tracing::subscriber::with_default(EventCounter(events.clone()), f);
        events.load(Ordering::SeqCst)
    }

    #[test]
    fn dev_accounts_are_logged_by_the_local_node_only() {
        assert_eq!(
            events_of(|| {
                let _ = Genesis::dev();
            }),
            0
        );
        assert_eq!(
            events_of(|| {
                let _ = Config::local_node();
            }),
            DEV_ACCOUNTS + 1
        );
    }

    #[test]
    fn network_config_starts_from_its_genesis() {
        let config = Config::for_network(Network::Goerli);

        assert_eq!(config.genesis, Some(Network::Goerli.genesis()));
    }
}
