//! The module defines the `Column` used by the `corechain` database.

use crate::kv_store::StorageColumn;

/// Database tables column ids.
#[repr(u32)]
#[derive(
    Copy,
    Clone,
    Debug,
    strum_macros::EnumCount,
    strum_macros::IntoStaticStr,
    PartialEq,
    Eq,
    enum_iterator::Sequence,
    Hash,
)]
pub enum Column {
    /// The postcard-encoded blocks. The key is the number and the hash of the block.
    Blocks = 0,
    /// The total difficulty of the chain at the block. Keyed like [`Column::Blocks`].
    TotalDifficulty = 1,
    /// The hash of the canonical block at the height.
    CanonicalHashes = 2,
    /// The reverse lookup from the block hash to its number.
    HeaderNumbers = 3,
    /// The column id of metadata about the blockchain, like the head header pointer.
    Metadata = 4,
    /// The JSON encoded chain configuration. The key is the genesis hash.
    ChainConfig = 5,
    /// The content-addressed genesis allocation blobs.
    GenesisAlloc = 6,
    /// The link from the genesis hash to the content hash of its allocation.
    GenesisAllocLinks = 7,
    /// The accounts state. The key is the state root followed by the address.
    State = 8,
}

impl Column {
    /// The total count of variants in the enum.
    pub const COUNT: usize = <Self as strum::EnumCount>::COUNT;

    /// Returns the `usize` representation of the `Column`.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

impl StorageColumn for Column {
    fn name(&self) -> &'static str {
        self.into()
    }

    fn id(&self) -> u32 {
        self.as_u32()
    }
}
