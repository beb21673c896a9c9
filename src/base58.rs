use crate::alphabet::Alphabet;
use crate::check;
use crate::error::{CheckedDecodeError, DecodeError};

/// Encode `input` with the Bitcoin alphabet.
pub fn encode(input: &[u8]) -> String {
    encode_with(&Alphabet::BITCOIN, input)
}

/// Encode `input` with `alphabet`.
///
/// Each leading `0x00` byte becomes one leading [`Alphabet::zero`] symbol; the
/// rest of the input is written as a big-endian radix-58 number.
pub fn encode_with(alphabet: &Alphabet, input: &[u8]) -> String {
    bs58::encode(input)
        .with_alphabet(alphabet.as_bs58())
        .into_string()
}

/// Decode a Bitcoin-alphabet string.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(&Alphabet::BITCOIN, input)
}

/// Decode `input` using `alphabet`.
///
/// Fails with [`DecodeError::InvalidCharacter`] on the first symbol not in the
/// alphabet. Whitespace is not skipped.
pub fn decode_with(alphabet: &Alphabet, input: &str) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(input)
        .with_alphabet(alphabet.as_bs58())
        .into_vec()
        .map_err(|e| decode_error(input, e))
}

/// Translate a `bs58` failure on `input`. `bs58` reports byte offsets; ours
/// count characters.
pub(crate) fn decode_error(input: &str, err: bs58::decode::Error) -> DecodeError {
    let char_index = |byte_index: usize| {
        input
            .get(..byte_index)
            .map_or(byte_index, |prefix| prefix.chars().count())
    };

    let err = match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            DecodeError::invalid_character(character, char_index(index))
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            let character = input
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            DecodeError::invalid_character(character, char_index(index))
        }
        other => DecodeError::invalid_data_length(other.to_string()),
    };

    if let DecodeError::InvalidCharacter { character, index } = &err {
        tracing::debug!(index, ?character, "rejected base58 input");
    }
    err
}

/// Base58 encoding for byte containers.
pub trait ToBase58 {
    fn to_base58(&self) -> String;

    fn to_base58_check(&self) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase58 for T {
    fn to_base58(&self) -> String {
        encode(self.as_ref())
    }

    fn to_base58_check(&self) -> String {
        check::encode_check(self.as_ref())
    }
}

/// Base58 decoding for string types.
pub trait FromBase58 {
    fn from_base58(&self) -> Result<Vec<u8>, DecodeError>;

    fn from_base58_check(&self) -> Result<Vec<u8>, CheckedDecodeError>;
}

impl<T: AsRef<str> + ?Sized> FromBase58 for T {
    fn from_base58(&self) -> Result<Vec<u8>, DecodeError> {
        decode(self.as_ref())
    }

    fn from_base58_check(&self) -> Result<Vec<u8>, CheckedDecodeError> {
        check::decode_check(self.as_ref())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        *state
    }

    fn random_bytes(state: &mut u64) -> Vec<u8> {
        let len = (lcg_next(state) % 48) as usize;
        let zeros = (lcg_next(state) % 4) as usize;
        let mut bytes = vec![0_u8; zeros.min(len)];
        while bytes.len() < len {
            bytes.push((lcg_next(state) >> 33) as u8);
        }
        bytes
    }

    #[test]
    fn known_vectors() {
        let vectors: &[(&[u8], &str)] = &[
            (b"Hello World!", "2NEpo7TZRRrLZSi2U"),
            (b"hello", "Cn8eVZg"),
            (b"aoeuaoeu", "HJF6DGL1iWG"),
            (&[0x00, 0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd], "111233QC4"),
            (b"a", "2g"),
            (b"bbb", "a3gV"),
        ];
        for (bytes, text) in vectors {
            assert_eq!(encode(bytes), *text);
            assert_eq!(decode(text).unwrap(), *bytes);
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn all_zero_bytes_map_to_zero_symbols() {
        for n in 1..8 {
            let zeros = vec![0_u8; n];
            let text = encode(&zeros);
            assert_eq!(text, "1".repeat(n));
            assert_eq!(decode(&text).unwrap(), zeros);
        }
    }

    #[test]
    fn leading_zeros_use_the_alphabet_zero_symbol() {
        assert_eq!(encode_with(&Alphabet::RIPPLE, b"hello"), "U83eVZg");
        assert_eq!(encode_with(&Alphabet::RIPPLE, b"\0hello"), "rU83eVZg");
        assert_eq!(
            decode_with(&Alphabet::RIPPLE, "rU83eVZg").unwrap(),
            b"\0hello"
        );
        assert_eq!(encode_with(&Alphabet::FLICKR, b"hello"), "cM8DuyF");
    }

    #[test]
    fn first_invalid_character_is_reported() {
        let err = decode("2NEpo0TZRRrLZSi2U").unwrap_err();
        assert_eq!(err, DecodeError::invalid_character('0', 5));

        let err = decode("abcIl").unwrap_err();
        assert_eq!(err, DecodeError::invalid_character('I', 3));
    }

    #[test]
    fn whitespace_is_invalid() {
        assert_eq!(
            decode(" 2g").unwrap_err(),
            DecodeError::invalid_character(' ', 0)
        );
        assert_eq!(
            decode("2g\n").unwrap_err(),
            DecodeError::invalid_character('\n', 2)
        );
    }

    #[test]
    fn index_counts_characters_not_bytes() {
        let err = decode("1é1").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidCharacter);
        assert_eq!(err.character(), Some('é'));
        assert_eq!(err.index(), Some(1));

        let err = decode("ü2\u{1F600}").unwrap_err();
        assert_eq!(err.index(), Some(0));
    }

    #[test]
    fn zero_symbol_after_value_is_a_digit() {
        // '1' is digit zero; only leading ones map to zero bytes.
        let bytes = decode("21").unwrap();
        assert_eq!(bytes, vec![58]);
        assert_eq!(encode(&bytes), "21");
    }

    #[test]
    fn roundtrip_property_holds_for_randomized_inputs() {
        let mut seed = 0x0B58_u64;
        for _ in 0..2_000 {
            let bytes = random_bytes(&mut seed);
            let text = encode(&bytes);
            assert_eq!(decode(&text).unwrap(), bytes, "roundtrip of {text}");
        }
    }

    #[test]
    fn byte_offsets_become_character_offsets() {
        let input = "2g\u{e9}";
        let err = decode_error(input, bs58::decode::Error::NonAsciiCharacter { index: 2 });
        assert_eq!(err, DecodeError::invalid_character('\u{e9}', 2));

        let input = "\u{e9}\u{e9}0";
        let err = decode_error(
            input,
            bs58::decode::Error::InvalidCharacter {
                character: '0',
                index: 4,
            },
        );
        assert_eq!(err, DecodeError::invalid_character('0', 2));
    }

    #[test]
    fn non_character_failures_become_length_errors() {
        let err = decode_error("2g", bs58::decode::Error::BufferTooSmall);
        assert_eq!(err.kind(), DecodeErrorKind::InvalidDataLength);
    }

    #[test]
    fn extension_traits_match_free_functions() {
        let bytes = b"Hello World!".to_vec();
        assert_eq!(bytes.to_base58(), "2NEpo7TZRRrLZSi2U");
        assert_eq!(b"Hello World!"[..].to_base58(), encode(b"Hello World!"));
        assert_eq!("2NEpo7TZRRrLZSi2U".from_base58().unwrap(), bytes);
        assert_eq!(String::from("2NEpo7TZRRrLZSi2U").from_base58().unwrap(), bytes);
        assert_eq!(bytes.to_base58_check(), "9wWTEnNTUzJGD7cXz99ejY");
        assert_eq!("9wWTEnNTUzJGD7cXz99ejY".from_base58_check().unwrap(), bytes);
    }
}
