#![deny(unused_must_use)]

mod chain_config;
mod genesis;
mod helpers;
mod local_node;

corechain_trace::enable_tracing!();
