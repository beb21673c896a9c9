//! 58-symbol alphabets backed by [`bs58::Alphabet`].

use std::fmt;

use crate::error::AlphabetError;

/// An ordered set of 58 distinct ASCII symbols. Symbol `i` encodes digit `i`.
#[derive(Clone, Copy)]
pub struct Alphabet {
    symbols: [u8; 58],
    inner: bs58::Alphabet,
}

impl Alphabet {
    /// Bitcoin alphabet, the default for every codec function.
    pub const BITCOIN: Self = Self::builtin(
        b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
        bs58::Alphabet::BITCOIN,
    );

    /// Ripple address alphabet.
    pub const RIPPLE: Self = Self::builtin(
        b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
        bs58::Alphabet::RIPPLE,
    );

    /// Flickr short-URL alphabet.
    pub const FLICKR: Self = Self::builtin(
        b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
        bs58::Alphabet::FLICKR,
    );

    const fn builtin(symbols: &[u8; 58], inner: &bs58::Alphabet) -> Self {
        Self {
            symbols: *symbols,
            inner: *inner,
        }
    }

    /// Build an alphabet from caller-supplied symbols.
    pub fn new(symbols: &[u8; 58]) -> Result<Self, AlphabetError> {
        let inner = bs58::Alphabet::new(symbols).map_err(|e| match e {
            bs58::alphabet::Error::DuplicateCharacter {
                character,
                first,
                second,
            } => AlphabetError::DuplicateCharacter {
                character,
                first,
                second,
            },
            bs58::alphabet::Error::NonAsciiCharacter { index } => {
                AlphabetError::NonAscii { index }
            }
            #[allow(
                unreachable_patterns,
                reason = "bs58 may mark its alphabet error non-exhaustive"
            )]
            _ => AlphabetError::Other {
                reason: e.to_string(),
            },
        })?;
        Ok(Self {
            symbols: *symbols,
            inner,
        })
    }

    /// The symbols in digit order.
    pub fn symbols(&self) -> &str {
        // All bytes are ASCII, checked at construction.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Symbol standing for a leading zero byte.
    pub fn zero(&self) -> char {
        char::from(self.symbols[0])
    }

    /// Digit value of `c`, or `None` if `c` is not in this alphabet.
    pub fn digit(&self, c: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&b| char::from(b) == c)
            .map(|i| i as u8)
    }

    pub(crate) fn as_bs58(&self) -> &bs58::Alphabet {
        &self.inner
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.symbols()).finish()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BITCOIN
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn builtin_alphabets_pass_validation() {
        for alphabet in [Alphabet::BITCOIN, Alphabet::RIPPLE, Alphabet::FLICKR] {
            let bytes: [u8; 58] = alphabet.symbols().as_bytes().try_into().unwrap();
            assert_eq!(Alphabet::new(&bytes).unwrap(), alphabet);
        }
    }

    #[test]
    fn builtin_symbols_match_bs58_tables() {
        for (ours, theirs) in [
            (Alphabet::BITCOIN, bs58::Alphabet::BITCOIN),
            (Alphabet::RIPPLE, bs58::Alphabet::RIPPLE),
            (Alphabet::FLICKR, bs58::Alphabet::FLICKR),
        ] {
            // A single byte below 58 encodes as the symbol for that digit.
            for (d, symbol) in ours.symbols().chars().enumerate().skip(1) {
                let text = bs58::encode([d as u8]).with_alphabet(theirs).into_string();
                assert_eq!(text, symbol.to_string());
            }
        }
    }

    #[test]
    fn digit_is_inverse_of_symbols() {
        let alphabet = Alphabet::BITCOIN;
        for (d, c) in alphabet.symbols().chars().enumerate() {
            assert_eq!(alphabet.digit(c), Some(d as u8), "symbol {c:?}");
        }
    }

    #[test]
    fn ambiguous_characters_are_not_bitcoin_digits() {
        for c in ['0', 'O', 'I', 'l', '+', '/', ' ', 'é', '\u{1F600}'] {
            assert_eq!(Alphabet::BITCOIN.digit(c), None, "{c:?}");
        }
    }

    #[test]
    fn zero_symbol_is_first_symbol() {
        assert_eq!(Alphabet::BITCOIN.zero(), '1');
        assert_eq!(Alphabet::RIPPLE.zero(), 'r');
        assert_eq!(Alphabet::FLICKR.zero(), '1');
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let mut symbols: [u8; 58] = Alphabet::BITCOIN.symbols().as_bytes().try_into().unwrap();
        symbols[57] = b'1';
        assert_eq!(
            Alphabet::new(&symbols),
            Err(AlphabetError::DuplicateCharacter {
                character: '1',
                first: 0,
                second: 57,
            })
        );
    }

    #[test]
    fn non_ascii_symbol_is_rejected() {
        let mut symbols: [u8; 58] = Alphabet::BITCOIN.symbols().as_bytes().try_into().unwrap();
        symbols[10] = 0xc3;
        assert_eq!(
            Alphabet::new(&symbols),
            Err(AlphabetError::NonAscii { index: 10 })
        );
    }
}
