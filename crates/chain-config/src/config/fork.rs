//! The protocol upgrades recognized by the chain configuration.

/// The identifier of the protocol-upgrade rule. The declaration order is the canonical
/// order used by the configuration diff and the compatibility check.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    enum_iterator::Sequence,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Fork {
    /// Homestead contract creation rules.
    Eip2,
    /// `DELEGATECALL`.
    Eip7,
    /// The DAO hard fork.
    Eip779,
    /// Gas cost changes for IO-heavy operations.
    Eip150,
    /// Replay protection with the chain id.
    Eip155,
    /// `EXP` cost increase.
    Eip160,
    /// State trie clearing.
    Eip161,
    /// Contract code size limit.
    Eip170,
    /// Difficulty adjustment including uncles.
    Eip100,
    /// `REVERT`.
    Eip140,
    /// Big integer modular exponentiation precompile.
    Eip198,
    /// `RETURNDATASIZE` and `RETURNDATACOPY`.
    Eip211,
    /// Pairing precompile.
    Eip212,
    /// Addition and scalar multiplication precompiles.
    Eip213,
    /// `STATICCALL`.
    Eip214,
    /// Status code in the receipts.
    Eip658,
    /// Bitwise shifting.
    Eip145,
    /// `CREATE2`.
    Eip1014,
    /// `EXTCODEHASH`.
    Eip1052,
    /// Net gas metering for `SSTORE`.
    Eip1283,
    /// Removal of the net gas metering.
    Eip1283Disable,
    /// Blake2 compression precompile.
    Eip152,
    /// Cheaper alt_bn128 precompiles.
    Eip1108,
    /// `CHAINID`.
    Eip1344,
    /// Repricing of the trie-size-dependent opcodes.
    Eip1884,
    /// Cheaper transaction calldata.
    Eip2028,
    /// Structured definitions for net gas metering.
    Eip2200,
    /// `MODEXP` repricing.
    Eip2565,
    /// Cold and warm state access costs.
    Eip2929,
    /// Access list transactions.
    Eip2930,
    /// Fee market.
    Eip1559,
    /// `BASEFEE`.
    Eip3198,
    /// Reduction of the refunds.
    Eip3529,
    /// Rejection of the contracts starting with `0xEF`.
    Eip3541,
    /// The pause of the difficulty bomb.
    Ecip1010Pause,
    /// The era-based monetary policy.
    Ecip1017,
    /// The removal of the difficulty bomb.
    Ecip1041,
}

/// The upgrades activated by the Homestead hard fork.
pub const HOMESTEAD: &[Fork] = &[Fork::Eip2, Fork::Eip7];
/// The upgrades activated by the Tangerine Whistle hard fork.
pub const TANGERINE_WHISTLE: &[Fork] = &[Fork::Eip150];
/// The upgrades activated by the Spurious Dragon hard fork.
pub const SPURIOUS_DRAGON: &[Fork] =
    &[Fork::Eip155, Fork::Eip160, Fork::Eip161, Fork::Eip170];
/// The upgrades activated by the Byzantium hard fork.
pub const BYZANTIUM: &[Fork] = &[
    Fork::Eip100,
    Fork::Eip140,
    Fork::Eip198,
    Fork::Eip211,
    Fork::Eip212,
    Fork::Eip213,
    Fork::Eip214,
    Fork::Eip658,
];
/// The upgrades activated by the Constantinople hard fork and kept by Petersburg.
pub const CONSTANTINOPLE: &[Fork] = &[Fork::Eip145, Fork::Eip1014, Fork::Eip1052];
/// The upgrades activated by the Istanbul hard fork.
pub const ISTANBUL: &[Fork] = &[
    Fork::Eip152,
    Fork::Eip1108,
    Fork::Eip1344,
    Fork::Eip1884,
    Fork::Eip2028,
    Fork::Eip2200,
];
/// The upgrades activated by the Berlin hard fork.
pub const BERLIN: &[Fork] = &[Fork::Eip2565, Fork::Eip2929, Fork::Eip2930];
/// The upgrades activated by the London hard fork.
pub const LONDON: &[Fork] = &[Fork::Eip1559, Fork::Eip3198, Fork::Eip3529, Fork::Eip3541];
