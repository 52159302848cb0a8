//! Blockchain related types

pub mod block;
pub mod header;
