//! Compares two chain configurations. [`diff`] reports every difference,
//! [`check_compatible`] decides whether the new configuration can replace the stored one
//! without rewriting the committed history.

use crate::config::{
    configurator::{
        ConsensusEngine,
        Configurator,
        EngineKind,
    },
    fork::Fork,
};
use corechain_types::BlockNumber;
use std::fmt;

/// The item of the chain configuration that can be compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigItem {
    /// See [`Configurator::network_id`].
    NetworkId,
    /// See [`Configurator::chain_id`].
    ChainId,
    /// The kind of the consensus engine.
    Engine,
    /// The activation of the protocol upgrade.
    Fork(Fork),
    /// See [`Configurator::ecip1010_length`].
    Ecip1010Length,
    /// See [`Configurator::ecip1017_era_rounds`].
    Ecip1017EraRounds,
    /// The block period of the proof-of-authority engine.
    CliquePeriod,
    /// The epoch length of the proof-of-authority engine.
    CliqueEpoch,
}

impl ConfigItem {
    /// Returns all items in the canonical order: identifiers, engine,
    /// protocol upgrades in the declaration order, engine parameters.
    pub fn registry() -> impl Iterator<Item = ConfigItem> {
        [ConfigItem::NetworkId, ConfigItem::ChainId, ConfigItem::Engine]
            .into_iter()
            .chain(enum_iterator::all::<Fork>().map(ConfigItem::Fork))
            .chain([
                ConfigItem::Ecip1010Length,
                ConfigItem::Ecip1017EraRounds,
                ConfigItem::CliquePeriod,
                ConfigItem::CliqueEpoch,
            ])
    }

    /// Reads the value of the item from the `config`.
    pub fn value_of<C>(&self, config: &C) -> ConfigValue
    where
        C: Configurator + ?Sized,
    {
        let clique = match config.engine() {
            ConsensusEngine::Clique(clique) => Some(clique),
            ConsensusEngine::Ethash => None,
        };
        match self {
            ConfigItem::NetworkId => ConfigValue::Number(config.network_id()),
            ConfigItem::ChainId => ConfigValue::Number(config.chain_id()),
            ConfigItem::Engine => ConfigValue::Engine(config.engine().kind()),
            ConfigItem::Fork(fork) => ConfigValue::Block(config.transition(*fork)),
            ConfigItem::Ecip1010Length => ConfigValue::Number(config.ecip1010_length()),
            ConfigItem::Ecip1017EraRounds => {
                ConfigValue::Number(config.ecip1017_era_rounds())
            }
            ConfigItem::CliquePeriod => {
                ConfigValue::Number(clique.map(|clique| clique.period))
            }
            ConfigItem::CliqueEpoch => {
                ConfigValue::Number(clique.map(|clique| clique.epoch))
            }
        }
    }
}

impl fmt::Display for ConfigItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigItem::NetworkId => write!(f, "network id"),
            ConfigItem::ChainId => write!(f, "chain id"),
            ConfigItem::Engine => write!(f, "consensus engine"),
            ConfigItem::Fork(fork) => write!(f, "{fork}"),
            ConfigItem::Ecip1010Length => write!(f, "ECIP1010 length"),
            ConfigItem::Ecip1017EraRounds => write!(f, "ECIP1017 era rounds"),
            ConfigItem::CliquePeriod => write!(f, "clique period"),
            ConfigItem::CliqueEpoch => write!(f, "clique epoch"),
        }
    }
}

/// The value of the [`ConfigItem`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    /// The activation height.
    Block(Option<BlockNumber>),
    /// The plain number.
    Number(Option<u64>),
    /// The kind of the consensus engine.
    Engine(EngineKind),
}

/// The item which has different values in two configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigDiff {
    /// The item.
    pub item: ConfigItem,
    /// The value in the first configuration.
    pub a: ConfigValue,
    /// The value in the second configuration.
    pub b: ConfigValue,
}

/// Returns every item of the registry whose value differs, in the canonical order.
/// The required block hashes are not compared.
pub fn diff<A, B>(a: &A, b: &B) -> Vec<ConfigDiff>
where
    A: Configurator + ?Sized,
    B: Configurator + ?Sized,
{
    ConfigItem::registry()
        .filter_map(|item| {
            let (a, b) = (item.value_of(a), item.value_of(b));
            (a != b).then_some(ConfigDiff { item, a, b })
        })
        .collect()
}

/// The new configuration contradicts the history committed with the stored one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "mismatching {what} in database (have {stored_block:?}, want {new_block:?}, rewindto {rewind_to_block})"
)]
pub struct ConfigCompatError {
    /// The item which changed.
    pub what: ConfigItem,
    /// The activation height in the stored configuration.
    pub stored_block: Option<BlockNumber>,
    /// The activation height in the new configuration.
    pub new_block: Option<BlockNumber>,
    /// The height the chain has to be rewound to before the new configuration applies.
    pub rewind_to_block: BlockNumber,
}

impl ConfigCompatError {
    fn new(
        what: ConfigItem,
        stored_block: Option<BlockNumber>,
        new_block: Option<BlockNumber>,
    ) -> Self {
        let lowest = match (stored_block, new_block) {
            (Some(stored), Some(new)) => stored.min(new),
            (stored, new) => stored.or(new).unwrap_or_default(),
        };
        Self {
            what,
            stored_block,
            new_block,
            rewind_to_block: lowest.saturating_sub(1),
        }
    }
}

/// Checks whether the `new` configuration can replace the `stored` one when the chain
/// head is at the `head`. If the rewind target itself is affected by an earlier
/// difference, the check is repeated until the deepest rewind target is found.
pub fn check_compatible<S, N>(
    stored: &S,
    new: &N,
    head: BlockNumber,
) -> Result<(), ConfigCompatError>
where
    S: Configurator + ?Sized,
    N: Configurator + ?Sized,
{
    let mut last_error = match check_compatible_at(stored, new, head) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };
    loop {
        match check_compatible_at(stored, new, last_error.rewind_to_block) {
            Err(err) if err.rewind_to_block != last_error.rewind_to_block => {
                last_error = err;
            }
            _ => return Err(last_error),
        }
    }
}

/// Single fail-fast pass over the registry.
fn check_compatible_at<S, N>(
    stored: &S,
    new: &N,
    head: BlockNumber,
) -> Result<(), ConfigCompatError>
where
    S: Configurator + ?Sized,
    N: Configurator + ?Sized,
{
    for item in ConfigItem::registry() {
        match item {
            ConfigItem::Fork(fork) => {
                let (stored_block, new_block) =
                    (stored.transition(fork), new.transition(fork));
                if is_fork_incompatible(stored_block, new_block, head) {
                    return Err(ConfigCompatError::new(item, stored_block, new_block))
                }
            }
            ConfigItem::ChainId => {
                let activation = stored.transition(Fork::Eip155);
                if stored.is_enabled(Fork::Eip155, head)
                    && stored.chain_id() != new.chain_id()
                {
                    return Err(ConfigCompatError::new(item, activation, activation))
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// The activations differ and the earlier of them is already in the history.
fn is_fork_incompatible(
    stored: Option<BlockNumber>,
    new: Option<BlockNumber>,
    head: BlockNumber,
) -> bool {
    let is_forked = |activation: Option<BlockNumber>| {
        activation.map_or(false, |activation| activation <= head)
    };
    (is_forked(stored) || is_forked(new)) && stored != new
}
