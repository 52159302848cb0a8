//! The module contains the implementation of the `Primitive` codec.
//! The codec is used for numbers stored in the keys. The big-endian
//! encoding keeps the lexicographic order of the keys equal to the numeric order.

use crate::codec::{
    Decode,
    Encode,
};
use std::borrow::Cow;

/// The codec is used for types that can be represented by an array.
/// The `SIZE` const specifies the size of the array used to represent the type.
pub struct Primitive<const SIZE: usize>;

macro_rules! impl_codec {
    ($($ty:ty, $size:expr),*) => {
        $(
            impl Encode<$ty> for Primitive<{ $size }> {
                fn encode(value: &$ty) -> Cow<'_, [u8]> {
                    Cow::Owned(value.to_be_bytes().to_vec())
                }
            }

            impl Decode<$ty> for Primitive<{ $size }> {
                fn decode(bytes: &[u8]) -> anyhow::Result<$ty> {
                    Ok(<$ty>::from_be_bytes(<[u8; { $size }]>::try_from(bytes)?))
                }
            }
        )*
    };
}

impl_codec! {
    u32, 4,
    u64, 8
}
