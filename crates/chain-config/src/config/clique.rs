//! The genesis extra data of the proof-of-authority chains carries the initial signers:
//! 32 bytes of vanity, the 20-byte addresses of the signers and 65 bytes of the seal.

use corechain_types::Address;

/// The length of the vanity prefix.
pub const EXTRA_VANITY: usize = 32;
/// The length of the seal suffix.
pub const EXTRA_SEAL: usize = 65;

const ADDRESS_LENGTH: usize = 20;

/// The extra data doesn't describe the initial signers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliqueExtraDataError {
    /// There is no room for the vanity and the seal.
    #[error("the extra data is {0} bytes long, it must hold the vanity and the seal")]
    TooShort(usize),
    /// The vanity is followed by the seal.
    #[error("the extra data has no signers")]
    NoSigners,
    /// The section between the vanity and the seal is not a multiple of the address length.
    #[error("the signers section of {0} bytes is not a list of addresses")]
    InvalidSigners(usize),
}

/// Returns the initial signers encoded in the genesis `extra_data`.
pub fn signers(extra_data: &[u8]) -> Result<Vec<Address>, CliqueExtraDataError> {
    let signers_len = extra_data
        .len()
        .checked_sub(EXTRA_VANITY + EXTRA_SEAL)
        .ok_or(CliqueExtraDataError::TooShort(extra_data.len()))?;
    if signers_len == 0 {
        return Err(CliqueExtraDataError::NoSigners)
    }
    if signers_len % ADDRESS_LENGTH != 0 {
        return Err(CliqueExtraDataError::InvalidSigners(signers_len))
    }

    let section = &extra_data[EXTRA_VANITY..][..signers_len];
    Ok(section
        .chunks_exact(ADDRESS_LENGTH)
        .map(Address::from_slice)
        .collect())
}

/// Builds the genesis extra data with the empty vanity and seal.
pub fn extra_data(signers: &[Address]) -> Vec<u8> {
    let mut extra = vec![0u8; EXTRA_VANITY];
    for signer in signers {
        extra.extend_from_slice(signer.as_bytes());
    }
    extra.extend_from_slice(&[0u8; EXTRA_SEAL]);
    extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn signers_survive_the_encoding() {
        let signers = vec![Address::repeat_byte(1), Address::repeat_byte(2)];

        assert_eq!(super::signers(&extra_data(&signers)), Ok(signers));
    }

    #[test_case(0 => CliqueExtraDataError::TooShort(0); "empty")]
    #[test_case(96 => CliqueExtraDataError::TooShort(96); "no room for the seal")]
    #[test_case(97 => CliqueExtraDataError::NoSigners; "vanity and seal only")]
    #[test_case(107 => CliqueExtraDataError::InvalidSigners(10); "partial signer")]
    fn malformed_extra_data_is_rejected(len: usize) -> CliqueExtraDataError {
        signers(&vec![0u8; len]).unwrap_err()
    }
}
