use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::alphabet::Alphabet;
use crate::error::{CheckedDecodeError, DecodeError};
use crate::{base16, base58, check};

// Plain JS objects rather than `Map`s for JSON objects.
fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_alphabet(name: Option<String>) -> Option<Alphabet> {
    match name.as_deref() {
        None | Some("bitcoin") => Some(Alphabet::BITCOIN),
        Some("ripple") => Some(Alphabet::RIPPLE),
        Some("flickr") => Some(Alphabet::FLICKR),
        Some(_) => None,
    }
}

fn decode_error_json(err: &DecodeError) -> serde_json::Value {
    match err {
        DecodeError::InvalidCharacter { character, index } => serde_json::json!({
            "kind": err.kind().as_ref(),
            "character": character.to_string(),
            "index": index,
            "message": err.to_string(),
        }),
        DecodeError::InvalidDataLength { message } => serde_json::json!({
            "kind": err.kind().as_ref(),
            "message": message,
        }),
    }
}

fn checked_error_json(err: &CheckedDecodeError) -> serde_json::Value {
    match err {
        CheckedDecodeError::Decode(inner) => decode_error_json(inner),
        CheckedDecodeError::ChecksumMismatch { expected, actual } => serde_json::json!({
            "kind": "checksum_mismatch",
            "expected": base16::encode(expected),
            "actual": base16::encode(actual),
            "message": err.to_string(),
        }),
    }
}

fn bytes_result(bytes: &[u8]) -> JsValue {
    to_js(&serde_json::json!({ "bytes": bytes }))
}

fn error_result(error: serde_json::Value) -> JsValue {
    to_js(&serde_json::json!({ "error": error }))
}

fn unknown_alphabet() -> JsValue {
    error_result(serde_json::json!({
        "kind": "unknown_alphabet",
        "message": "Unknown alphabet. Known alphabets: bitcoin, ripple, flickr.",
    }))
}

/// Encode bytes as Base58. `alphabet` defaults to `"bitcoin"`.
#[wasm_bindgen]
pub fn base58_encode(bytes: &[u8], alphabet: Option<String>) -> Option<String> {
    parse_alphabet(alphabet).map(|a| base58::encode_with(&a, bytes))
}

/// Decode Base58 text into `{bytes}` or `{error}`.
#[wasm_bindgen]
pub fn base58_decode(input: &str, alphabet: Option<String>) -> JsValue {
    let Some(alphabet) = parse_alphabet(alphabet) else {
        return unknown_alphabet();
    };
    match base58::decode_with(&alphabet, input) {
        Ok(bytes) => bytes_result(&bytes),
        Err(e) => error_result(decode_error_json(&e)),
    }
}

#[wasm_bindgen]
pub fn base58_encode_check(bytes: &[u8], alphabet: Option<String>) -> Option<String> {
    parse_alphabet(alphabet).map(|a| check::encode_check_with(&a, bytes))
}

/// Decode Base58Check text into `{bytes}` (payload only) or `{error}`.
#[wasm_bindgen]
pub fn base58_decode_check(input: &str, alphabet: Option<String>) -> JsValue {
    let Some(alphabet) = parse_alphabet(alphabet) else {
        return unknown_alphabet();
    };
    match check::decode_check_with(&alphabet, input) {
        Ok(bytes) => bytes_result(&bytes),
        Err(e) => error_result(checked_error_json(&e)),
    }
}

#[wasm_bindgen]
pub fn base16_encode(bytes: &[u8]) -> String {
    base16::encode(bytes)
}

#[wasm_bindgen]
pub fn base16_decode(input: &str) -> JsValue {
    match base16::decode(input) {
        Ok(bytes) => bytes_result(&bytes),
        Err(e) => error_result(decode_error_json(&e)),
    }
}

/// Double-SHA-256 checksum of `bytes`, as hex.
#[wasm_bindgen]
pub fn base58_checksum(bytes: &[u8]) -> String {
    base16::encode(&check::checksum(bytes))
}
