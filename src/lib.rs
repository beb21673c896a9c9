#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

//! Base58, Base58Check and Base16 codecs.
//!
//! Decoding never panics and never returns partial output: a failed decode
//! yields a [`DecodeError`] naming the offending character and its position,
//! or describing the length violation.
//!
//! ```
//! use base58_codec::{DecodeError, FromBase58, ToBase58};
//!
//! assert_eq!(b"Hello World!".to_base58(), "2NEpo7TZRRrLZSi2U");
//! assert_eq!("2NEpo7TZRRrLZSi2U".from_base58().ok(), Some(b"Hello World!".to_vec()));
//! assert_eq!(
//!     "2NEpo0".from_base58(),
//!     Err(DecodeError::InvalidCharacter { character: '0', index: 5 }),
//! );
//! ```

pub mod alphabet;
pub mod base16;
pub mod base58;
pub mod check;
pub mod error;
pub mod serde_base58;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use alphabet::Alphabet;
pub use base58::{FromBase58, ToBase58, decode, decode_with, encode, encode_with};
pub use check::{checksum, decode_check, decode_check_with, encode_check, encode_check_with};
pub use error::{AlphabetError, CheckedDecodeError, DecodeError, DecodeErrorKind};
