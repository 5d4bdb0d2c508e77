use thiserror::Error;

use crate::registry::Algorithm;

/// Which construction invariant a digest length broke.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LengthViolation {
    #[error("digest of {actual} bytes exceeds the 127-byte format limit")]
    Oversized { actual: usize },

    #[error("expected {expected} bytes, got {actual}")]
    Mismatch { expected: usize, actual: usize },

    #[error("identity payload of {actual} bytes exceeds {max} bytes")]
    IdentityOversized { actual: usize, max: usize },
}

/// Errors produced while building, parsing, or decoding multihashes.
#[derive(Debug, Error)]
pub enum MultihashError {
    #[error("unknown multihash type code: {0:#04x}")]
    UnknownAlgorithm(u8),

    #[error("unknown multihash algorithm name: {0}")]
    UnknownAlgorithmName(String),

    #[error("invalid digest length for {algorithm}: {violation}")]
    InvalidDigestLength {
        algorithm: Algorithm,
        violation: LengthViolation,
    },

    #[error("odd number of hex digits: {0}")]
    OddHexLength(usize),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("malformed base-58 string: {0}")]
    MalformedBase58(#[from] bs58::decode::Error),

    #[error("multibase decoding failed: {0}")]
    Multibase(#[from] multibase::Error),

    #[error("truncated multihash: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MultihashError {
    /// Returns `true` for any digest-length invariant failure.
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, Self::InvalidDigestLength { .. })
    }
}

pub type MultihashResult<T> = Result<T, MultihashError>;
