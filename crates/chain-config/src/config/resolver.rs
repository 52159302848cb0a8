//! Decodes the stored chain configuration. The document carries no version tag, so the
//! schemas are tried from the newest to the oldest. Only the oldest schema accepts
//! unknown keys, the other ones must match exactly.

use crate::config::configurator::{
    ChainConfig,
    ChainConfigurator,
    EthereumChainConfig,
    LegacyChainConfig,
};
use serde::Deserialize;

/// The stored configuration can't be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not a JSON document.
    #[error("the chain configuration is not a JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document doesn't match any schema.
    #[error(
        "the chain configuration matches no known schema (modern: {modern}; ethereum: {ethereum}; legacy: {legacy})"
    )]
    UnknownSchema {
        /// Why the current schema rejected the document.
        modern: String,
        /// Why the upstream schema rejected the document.
        ethereum: String,
        /// Why the legacy schema rejected the document.
        legacy: String,
    },
}

/// Decodes the raw stored configuration into the configurator of the first matching schema.
pub fn resolve(raw: &[u8]) -> Result<ChainConfigurator, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(raw)?;
    resolve_value(&value)
}

/// Decodes the JSON document into the configurator of the first matching schema.
pub fn resolve_value(
    value: &serde_json::Value,
) -> Result<ChainConfigurator, DecodeError> {
    let modern = match ChainConfig::deserialize(value) {
        Ok(config) => return Ok(config.into()),
        Err(err) => err,
    };
    let ethereum = match EthereumChainConfig::deserialize(value) {
        Ok(config) => return Ok(config.into()),
        Err(err) => err,
    };
    let legacy = match LegacyChainConfig::deserialize(value) {
        Ok(config) => return Ok(config.into()),
        Err(err) => err,
    };

    Err(DecodeError::UnknownSchema {
        modern: modern.to_string(),
        ethereum: ethereum.to_string(),
        legacy: legacy.to_string(),
    })
}
