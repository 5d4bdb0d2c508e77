use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LengthViolation, MultihashError, MultihashResult};
use crate::registry::{Algorithm, DigestLength};

/// Largest digest the single-byte length field is allowed to describe.
///
/// A byte could hold 255, but values above 127 are reserved so the length
/// can later grow into a varint without changing existing encodings.
pub const MAX_DIGEST_LEN: usize = 127;

/// Type byte plus length byte.
pub const HEADER_LEN: usize = 2;

/// A self-describing digest: algorithm type code, length, and digest bytes.
///
/// Binary layout:
/// ```text
/// [1 byte: type code][1 byte: digest length][N bytes: digest]
/// ```
///
/// Values are validated on construction and immutable afterwards. Equality
/// requires the same algorithm and byte-identical digests.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash {
    algorithm: Algorithm,
    digest: Box<[u8]>,
}

impl Multihash {
    /// Wrap a pre-computed digest, checking it against the algorithm's length rule.
    pub fn new(algorithm: Algorithm, digest: impl Into<Vec<u8>>) -> MultihashResult<Self> {
        let digest = digest.into();
        validate_len(algorithm, digest.len())?;
        Ok(Self {
            algorithm,
            digest: digest.into_boxed_slice(),
        })
    }

    /// Embed raw bytes with the identity algorithm (at most 64 bytes).
    pub fn identity(data: impl Into<Vec<u8>>) -> MultihashResult<Self> {
        Self::new(Algorithm::Identity, data)
    }

    /// The algorithm that produced the digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The type code of the algorithm.
    pub fn code(&self) -> u8 {
        self.algorithm.code()
    }

    /// The digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// An owned copy of the digest bytes.
    pub fn to_digest_vec(&self) -> Vec<u8> {
        self.digest.to_vec()
    }

    /// Consume the multihash, returning the digest bytes.
    pub fn into_digest(self) -> Vec<u8> {
        self.digest.into_vec()
    }

    /// Length of the digest in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest.len()
    }

    /// Length of the binary encoding (`digest_len() + 2`).
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.digest.len()
    }

    /// Encode to the binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.algorithm.code());
        // Bounded by MAX_DIGEST_LEN at construction.
        out.push(self.digest.len() as u8);
        out.extend_from_slice(&self.digest);
        out
    }

    /// Parse from the binary layout.
    ///
    /// Only the first `declared length + 2` bytes are read; anything after
    /// them is ignored. A buffer shorter than that fails with
    /// [`MultihashError::TruncatedInput`].
    pub fn from_bytes(buf: &[u8]) -> MultihashResult<Self> {
        let (mh, _) = Self::split_from(buf)?;
        Ok(mh)
    }

    /// Parse one multihash from the front of `buf`, returning the remaining bytes.
    pub fn split_from(buf: &[u8]) -> MultihashResult<(Self, &[u8])> {
        let truncated = |expected| MultihashError::TruncatedInput {
            expected,
            actual: buf.len(),
        };

        let (&code, rest) = buf.split_first().ok_or_else(|| truncated(HEADER_LEN))?;
        let algorithm = Algorithm::from_code(code)?;
        let (&declared, rest) = rest.split_first().ok_or_else(|| truncated(HEADER_LEN))?;
        let declared = declared as usize;
        if rest.len() < declared {
            return Err(truncated(HEADER_LEN + declared));
        }

        let (digest, remainder) = rest.split_at(declared);
        Ok((Self::new(algorithm, digest)?, remainder))
    }

    /// Lowercase hex encoding of the binary form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse from a hex string (either case).
    pub fn from_hex(s: &str) -> MultihashResult<Self> {
        if s.len() % 2 != 0 {
            return Err(MultihashError::OddHexLength(s.len()));
        }
        let bytes = hex::decode(s).map_err(|e| MultihashError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Base-58 (Bitcoin alphabet) encoding of the binary form.
    ///
    /// This is the canonical text form and what `Display` prints.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Parse from a base-58 string.
    pub fn from_base58(s: &str) -> MultihashResult<Self> {
        let bytes = bs58::decode(s).into_vec()?;
        Self::from_bytes(&bytes)
    }
}

fn validate_len(algorithm: Algorithm, len: usize) -> MultihashResult<()> {
    let violation = if len > MAX_DIGEST_LEN {
        Some(LengthViolation::Oversized { actual: len })
    } else {
        match algorithm.digest_len() {
            DigestLength::Fixed(expected) if expected != len => Some(LengthViolation::Mismatch {
                expected,
                actual: len,
            }),
            DigestLength::Variable { max } if len > max => {
                Some(LengthViolation::IdentityOversized { actual: len, max })
            }
            _ => None,
        }
    };

    match violation {
        Some(violation) => Err(MultihashError::InvalidDigestLength {
            algorithm,
            violation,
        }),
        None => Ok(()),
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multihash({}:{})", self.algorithm, self.to_base58())
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Multihash {
    type Err = MultihashError;

    /// Inverse of `Display`: parses base-58. Use [`Multihash::decode`] for
    /// multibase-prefixed input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = MultihashError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(buf)
    }
}

impl From<&Multihash> for Vec<u8> {
    fn from(mh: &Multihash) -> Self {
        mh.to_bytes()
    }
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}
