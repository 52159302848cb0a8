//! The block is the header with the list of opaque transactions.

use super::header::Header;
use crate::{
    fuel_merkle::binary::root_calculator::MerkleRootCalculator,
    BlockNumber,
    Bytes32,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The raw bytes of the transaction. The genesis bootstrap doesn't interpret them.
pub type RawTransaction = Vec<u8>;

/// The block with its header and body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    header: Header,
    transactions: Vec<RawTransaction>,
}

impl Block {
    /// Creates a new block and commits the `transactions` into the header.
    pub fn new(mut header: Header, transactions: Vec<RawTransaction>) -> Self {
        header.transactions_root = transactions_root(&transactions);
        Self {
            header,
            transactions,
        }
    }

    /// Returns the header of the block.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the transactions of the block.
    pub fn transactions(&self) -> &[RawTransaction] {
        &self.transactions
    }

    /// Returns the hash of the block.
    pub fn hash(&self) -> Bytes32 {
        self.header.hash()
    }

    /// Returns the height of the block.
    pub fn number(&self) -> BlockNumber {
        self.header.number
    }

    /// Returns the difficulty of the block.
    pub fn difficulty(&self) -> U256 {
        self.header.difficulty
    }
}

fn transactions_root(transactions: &[RawTransaction]) -> Bytes32 {
    let mut root_calculator = MerkleRootCalculator::new();
    for transaction in transactions {
        root_calculator.push(transaction.as_slice());
    }
    Bytes32::from(root_calculator.root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_has_the_empty_transactions_root() {
        let block = Block::new(Header::default(), vec![]);

        assert_eq!(
            block.header().transactions_root,
            Bytes32::from(MerkleRootCalculator::new().root())
        );
        assert_eq!(block.hash(), block.header().hash());
        assert_eq!(block.number(), 0);
    }

    #[test]
    fn transactions_change_the_block_hash() {
        let empty = Block::new(Header::default(), vec![]);
        let non_empty = Block::new(Header::default(), vec![vec![1, 2, 3]]);

        assert_ne!(empty.hash(), non_empty.hash());
    }
}
