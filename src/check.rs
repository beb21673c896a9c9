//! Base58Check: Base58 of `payload || checksum(payload)`.

use sha2::{Digest, Sha256};

use crate::alphabet::Alphabet;
use crate::base58;
use crate::error::{CheckedDecodeError, DecodeError};

pub const CHECKSUM_LEN: usize = 4;

/// First four bytes of `SHA-256(SHA-256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0_u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

pub fn encode_check(payload: &[u8]) -> String {
    encode_check_with(&Alphabet::BITCOIN, payload)
}

pub fn encode_check_with(alphabet: &Alphabet, payload: &[u8]) -> String {
    bs58::encode(payload)
        .with_alphabet(alphabet.as_bs58())
        .with_check()
        .into_string()
}

pub fn decode_check(input: &str) -> Result<Vec<u8>, CheckedDecodeError> {
    decode_check_with(&Alphabet::BITCOIN, input)
}

/// Decode `input` and verify its trailing checksum, returning the payload alone.
pub fn decode_check_with(
    alphabet: &Alphabet,
    input: &str,
) -> Result<Vec<u8>, CheckedDecodeError> {
    bs58::decode(input)
        .with_alphabet(alphabet.as_bs58())
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::NoChecksum => {
                let len = base58::decode_with(alphabet, input).map_or(0, |data| data.len());
                tracing::debug!(len, "base58check input too short");
                DecodeError::invalid_data_length(format!(
                    "expected at least {CHECKSUM_LEN} bytes, got {len}"
                ))
                .into()
            }
            // bs58 names the recomputed checksum `checksum` and the trailing bytes `expected_checksum`.
            bs58::decode::Error::InvalidChecksum {
                checksum,
                expected_checksum,
            } => {
                tracing::debug!(?checksum, ?expected_checksum, "base58check checksum mismatch");
                CheckedDecodeError::ChecksumMismatch {
                    expected: checksum,
                    actual: expected_checksum,
                }
            }
            other => base58::decode_error(input, other).into(),
        })
}
