pub mod alloc;
pub mod clique;
pub mod compat;
pub mod configurator;
pub mod fork;
pub mod genesis;
pub mod network;
pub mod resolver;

pub use self::alloc::*;
pub use compat::{
    check_compatible,
    diff,
    ConfigCompatError,
    ConfigDiff,
    ConfigItem,
    ConfigValue,
};
pub use configurator::*;
pub use fork::Fork;
pub use genesis::*;
pub use network::*;
pub use resolver::{
    resolve,
    DecodeError,
};
