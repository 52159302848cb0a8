#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]
#![deny(unused_crate_dependencies)]
#![deny(unused_imports)]

#[doc(no_inline)]
pub use corechain_chain_config as chain_config;
#[doc(no_inline)]
pub use corechain_storage as storage;
#[doc(no_inline)]
pub use corechain_types as types;

pub mod database;
pub mod service;
pub mod state;

#[cfg(test)]
corechain_trace::enable_tracing!();
