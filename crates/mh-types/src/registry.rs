use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MultihashError, MultihashResult};

/// Largest payload the identity pseudo-algorithm may carry.
pub const IDENTITY_MAX_LEN: usize = 64;

/// Expected digest length for an algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestLength {
    /// The algorithm always produces exactly this many bytes.
    Fixed(usize),
    /// Any length up to `max` bytes (identity passthrough).
    Variable { max: usize },
}

impl DigestLength {
    /// Upper bound on the digest length.
    pub fn max(&self) -> usize {
        match *self {
            Self::Fixed(n) => n,
            Self::Variable { max } => max,
        }
    }
}

/// A registered multihash algorithm.
///
/// The set is closed: every variant maps to a single type code, and the
/// codes and lengths match the shared multihash table so that encoded values
/// interoperate with other implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// Passthrough of the raw input, no hashing.
    #[serde(rename = "identity")]
    Identity,
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha2-256")]
    Sha2_256,
    #[serde(rename = "sha2-512")]
    Sha2_512,
    #[serde(rename = "sha3-512")]
    Sha3_512,
    #[serde(rename = "sha3-384")]
    Sha3_384,
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha3-224")]
    Sha3_224,
    #[serde(rename = "keccak-224")]
    Keccak224,
    #[serde(rename = "keccak-256")]
    Keccak256,
    #[serde(rename = "keccak-384")]
    Keccak384,
    #[serde(rename = "keccak-512")]
    Keccak512,
    #[serde(rename = "blake3")]
    Blake3,
    #[serde(rename = "blake2b-512")]
    Blake2b,
    #[serde(rename = "blake2s-256")]
    Blake2s,
}

impl Algorithm {
    /// Every registered algorithm, ordered by type code.
    pub const ALL: [Algorithm; 16] = [
        Self::Identity,
        Self::Sha1,
        Self::Sha2_256,
        Self::Sha2_512,
        Self::Sha3_512,
        Self::Sha3_384,
        Self::Sha3_256,
        Self::Sha3_224,
        Self::Keccak224,
        Self::Keccak256,
        Self::Keccak384,
        Self::Keccak512,
        Self::Blake3,
        Self::Blake2b,
        Self::Blake2s,
        Self::Md5,
    ];

    /// The type code written as the first byte of the binary form.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Identity => 0x00,
            Self::Sha1 => 0x11,
            Self::Sha2_256 => 0x12,
            Self::Sha2_512 => 0x13,
            Self::Sha3_512 => 0x14,
            Self::Sha3_384 => 0x15,
            Self::Sha3_256 => 0x16,
            Self::Sha3_224 => 0x17,
            Self::Keccak224 => 0x1a,
            Self::Keccak256 => 0x1b,
            Self::Keccak384 => 0x1c,
            Self::Keccak512 => 0x1d,
            Self::Blake3 => 0x1e,
            Self::Blake2b => 0x40,
            Self::Blake2s => 0x41,
            Self::Md5 => 0xd5,
        }
    }

    /// Resolve a type code. Fails with [`MultihashError::UnknownAlgorithm`].
    pub fn from_code(code: u8) -> MultihashResult<Self> {
        let algorithm = match code {
            0x00 => Self::Identity,
            0x11 => Self::Sha1,
            0x12 => Self::Sha2_256,
            0x13 => Self::Sha2_512,
            0x14 => Self::Sha3_512,
            0x15 => Self::Sha3_384,
            0x16 => Self::Sha3_256,
            0x17 => Self::Sha3_224,
            0x1a => Self::Keccak224,
            0x1b => Self::Keccak256,
            0x1c => Self::Keccak384,
            0x1d => Self::Keccak512,
            0x1e => Self::Blake3,
            0x40 => Self::Blake2b,
            0x41 => Self::Blake2s,
            0xd5 => Self::Md5,
            _ => return Err(MultihashError::UnknownAlgorithm(code)),
        };
        Ok(algorithm)
    }

    /// The digest length this algorithm must produce.
    pub const fn digest_len(&self) -> DigestLength {
        match self {
            Self::Identity => DigestLength::Variable {
                max: IDENTITY_MAX_LEN,
            },
            Self::Md5 => DigestLength::Fixed(16),
            Self::Sha1 => DigestLength::Fixed(20),
            Self::Sha3_224 | Self::Keccak224 => DigestLength::Fixed(24),
            Self::Sha2_256 | Self::Sha3_256 | Self::Keccak256 | Self::Blake3 | Self::Blake2s => {
                DigestLength::Fixed(32)
            }
            Self::Sha3_384 | Self::Keccak384 => DigestLength::Fixed(48),
            Self::Sha2_512 | Self::Sha3_512 | Self::Keccak512 | Self::Blake2b => {
                DigestLength::Fixed(64)
            }
        }
    }

    /// Canonical name from the multihash table.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha2_256 => "sha2-256",
            Self::Sha2_512 => "sha2-512",
            Self::Sha3_512 => "sha3-512",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_224 => "sha3-224",
            Self::Keccak224 => "keccak-224",
            Self::Keccak256 => "keccak-256",
            Self::Keccak384 => "keccak-384",
            Self::Keccak512 => "keccak-512",
            Self::Blake3 => "blake3",
            Self::Blake2b => "blake2b-512",
            Self::Blake2s => "blake2s-256",
        }
    }

    /// Resolve a canonical name or common alias, ignoring ASCII case.
    pub fn from_name(name: &str) -> MultihashResult<Self> {
        let lowered = name.to_ascii_lowercase();
        let alias = match lowered.as_str() {
            "id" => Some(Self::Identity),
            "sha-1" => Some(Self::Sha1),
            "sha256" | "sha-256" => Some(Self::Sha2_256),
            "sha512" | "sha-512" => Some(Self::Sha2_512),
            "blake2b" => Some(Self::Blake2b),
            "blake2s" => Some(Self::Blake2s),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|a| a.name() == lowered))
            .ok_or_else(|| MultihashError::UnknownAlgorithmName(name.to_string()))
    }

    /// Returns `true` for the identity pseudo-algorithm.
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = MultihashError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Algorithm> for u8 {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.code()
    }
}

/// Look up a registry entry by its type code.
pub fn lookup(code: u8) -> MultihashResult<Algorithm> {
    Algorithm::from_code(code)
}
