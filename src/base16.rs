//! Lowercase hexadecimal, reporting failures with the same [`DecodeError`] kinds as Base58.

use std::borrow::Cow;

use crate::error::DecodeError;

pub fn encode(input: &[u8]) -> String {
    hex::encode(input)
}

/// Decode hex digits of either case.
///
/// Odd-length input is read as if it carried one extra leading `'0'`, so
/// `"abc"` decodes to `[0x0a, 0xbc]`. Reported indices refer to `input` as given.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if let Some((index, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        tracing::debug!(index, ?character, "rejected base16 input");
        return Err(DecodeError::invalid_character(character, index));
    }

    // Every char is an ASCII hex digit and the padded length is even, so
    // `hex` cannot fail here; `hex_error` still maps each case faithfully.
    let padded: Cow<'_, str> = if input.len() % 2 == 0 {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("0{input}"))
    };
    let pad = padded.len() - input.len();
    hex::decode(padded.as_ref()).map_err(|e| hex_error(e, pad, padded.len()))
}

/// Translate a `hex` failure on input that was left-padded with `pad` zeros
/// to `digits` characters.
fn hex_error(err: hex::FromHexError, pad: usize, digits: usize) -> DecodeError {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            DecodeError::invalid_character(c, index.saturating_sub(pad))
        }
        // OddLength and InvalidStringLength.
        _ => DecodeError::invalid_data_length(format!(
            "expected an even number of hex digits, got {digits}"
        )),
    }
}
