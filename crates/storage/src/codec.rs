//! Codecs turn the typed values of the `Database` into the bytes of the key-value store.
//! The codec is picked per column by the accessor, the value type only has to satisfy
//! the bounds of that codec.

use crate::kv_store::Value;
use std::borrow::Cow;

pub mod postcard;
pub mod primitive;
pub mod raw;

/// Encodes the value of the type `T` into the stored bytes.
pub trait Encode<T: ?Sized> {
    /// Returns the stored bytes. The bytes are borrowed from the `value` when it
    /// already is the byte representation.
    fn encode(value: &T) -> Cow<'_, [u8]>;

    /// Returns the stored bytes as the [`Value`] of the store.
    fn encode_as_value(value: &T) -> Value {
        Value::new(Self::encode(value).into_owned())
    }
}

/// Decodes the value of the type `T` from the stored bytes.
pub trait Decode<T> {
    /// Decodes the value from the raw bytes.
    fn decode(bytes: &[u8]) -> anyhow::Result<T>;

    /// Decodes the value from the [`Value`] read from the store.
    fn decode_from_value(value: Value) -> anyhow::Result<T> {
        Self::decode(value.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        primitive::Primitive,
        raw::Raw,
        *,
    };

    #[test]
    fn value_holds_the_encoded_bytes() {
        let value = <Primitive<8> as Encode<u64>>::encode_as_value(&1);

        assert_eq!(value.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(<Primitive<8> as Decode<u64>>::decode_from_value(value).unwrap(), 1);
    }

    #[test]
    fn bytes_are_borrowed_without_copy() {
        let bytes = [7u8; 32];

        assert!(matches!(Raw::encode(&bytes), Cow::Borrowed(_)));
    }
}
