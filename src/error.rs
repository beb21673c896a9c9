/// Tag identifying which validation rule a [`DecodeError`] violated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DecodeErrorKind {
    InvalidCharacter,
    InvalidDataLength,
}

/// Failure of a decode pass.
///
/// Both variants are terminal: a decode that returns one of them has produced
/// no output, there is no partial result to recover.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the accepted alphabet. `index` counts characters,
    /// not bytes, from the start of the input.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// The decoded data violates a length precondition.
    #[error("{message}")]
    InvalidDataLength { message: String },
}

impl DecodeError {
    pub fn invalid_character(character: char, index: usize) -> Self {
        Self::InvalidCharacter { character, index }
    }

    pub fn invalid_data_length(message: impl Into<String>) -> Self {
        Self::InvalidDataLength {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::InvalidCharacter { .. } => DecodeErrorKind::InvalidCharacter,
            Self::InvalidDataLength { .. } => DecodeErrorKind::InvalidDataLength,
        }
    }

    /// The rejected character, for [`DecodeError::InvalidCharacter`].
    pub fn character(&self) -> Option<char> {
        match self {
            Self::InvalidCharacter { character, .. } => Some(*character),
            Self::InvalidDataLength { .. } => None,
        }
    }

    /// Position of the rejected character, for [`DecodeError::InvalidCharacter`].
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidCharacter { index, .. } => Some(*index),
            Self::InvalidDataLength { .. } => None,
        }
    }

    /// The length diagnostic, for [`DecodeError::InvalidDataLength`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidCharacter { .. } => None,
            Self::InvalidDataLength { message } => Some(message),
        }
    }
}

/// Failure of a Base58Check decode: either the underlying Base58 pass failed,
/// or the trailing checksum did not match the payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckedDecodeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
}

impl CheckedDecodeError {
    /// The underlying decode error, if the failure happened before checksum verification.
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(e) => Some(e),
            Self::ChecksumMismatch { .. } => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet symbol at index {index} is not ASCII")]
    NonAscii { index: usize },

    #[error("alphabet symbol {character:?} appears at both index {first} and {second}")]
    DuplicateCharacter {
        character: char,
        first: usize,
        second: usize,
    },

    #[error("invalid alphabet: {reason}")]
    Other { reason: String },
}
