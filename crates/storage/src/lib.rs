//! The crate `corechain-storage` contains storage types and primitives used by `corechain`.
//! This crate doesn't contain the actual implementation of the storage. It describes the
//! columns of the `Database`, the key-value interface and the codecs of the stored values.

#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]
#![warn(missing_docs)]

pub mod codec;
pub mod column;
pub mod kv_store;

/// The storage result alias.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, derive_more::Display, derive_more::From)]
#[non_exhaustive]
/// Error occurring during interaction with storage
pub enum Error {
    /// Error occurred during serialization or deserialization of the entity.
    #[display(fmt = "error performing serialization or deserialization `{_0}`")]
    Codec(anyhow::Error),
    /// This error should be created with `not_found` macro.
    #[display(fmt = "resource of type `{_0}` was not found at the: {_1}")]
    NotFound(&'static str, &'static str),
    /// Unknown or not expected(by architecture) error.
    #[from]
    Other(anyhow::Error),
}

impl std::error::Error for Error {}

/// The helper trait to work with storage errors.
pub trait IsNotFound {
    /// Return `true` if the error is [`Error::NotFound`].
    fn is_not_found(&self) -> bool;
}

impl IsNotFound for Error {
    fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_, _))
    }
}

impl<T> IsNotFound for Result<T> {
    fn is_not_found(&self) -> bool {
        match self {
            Err(err) => err.is_not_found(),
            _ => false,
        }
    }
}

/// Creates `StorageError::NotFound` error with file and line information inside.
///
/// # Examples
///
/// ```
/// use corechain_storage::not_found;
///
/// let error = not_found!("HeadHeader");
/// ```
#[macro_export]
macro_rules! not_found {
    ($name: literal) => {
        $crate::Error::NotFound($name, concat!(file!(), ":", line!()))
    };
    ($ty: ty) => {
        $crate::Error::NotFound(
            ::core::any::type_name::<$ty>(),
            concat!(file!(), ":", line!()),
        )
    };
}
