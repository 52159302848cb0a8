//! The chain configuration of the node: the schemas of the stored configuration,
//! the compatibility rules between them and the genesis specification.

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::arithmetic_side_effects)]
#![deny(unused_crate_dependencies)]
#![deny(warnings)]

pub mod config;
mod commitment;
mod serialization;

pub use commitment::GenesisCommitment;
pub use config::*;
