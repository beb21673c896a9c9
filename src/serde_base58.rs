//! Field adapters for `#[serde(with = "...")]` that store bytes as Base58 text.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "base58_codec::serde_base58")]
//!     key: Vec<u8>,
//!     #[serde(with = "base58_codec::serde_base58::check")]
//!     address: Vec<u8>,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    serializer.serialize_str(&crate::base58::encode(bytes.as_ref()))
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: From<Vec<u8>>,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    crate::base58::decode(&s)
        .map(T::from)
        .map_err(D::Error::custom)
}

/// Same as the parent module, with a Base58Check checksum.
pub mod check {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]> + ?Sized,
        S: Serializer,
    {
        serializer.serialize_str(&crate::check::encode_check(bytes.as_ref()))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::check::decode_check(&s)
            .map(T::from)
            .map_err(D::Error::custom)
    }
}
