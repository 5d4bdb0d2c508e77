use std::io::Read;

use mh_types::{Algorithm, Multihash};
use tracing::trace;

use crate::config::DigestConfig;
use crate::error::{CryptoError, CryptoResult};
use crate::provider::{DigestProvider, RustCryptoProvider};

/// Computes digests through a [`DigestProvider`] and wraps them as multihashes.
///
/// The identity algorithm never reaches the provider: its "digest" is the
/// input itself, capped at 64 bytes by [`Multihash`] construction.
#[derive(Clone, Debug)]
pub struct Multihasher<P = RustCryptoProvider> {
    provider: P,
}

impl Default for Multihasher {
    fn default() -> Self {
        Self::new(RustCryptoProvider::default())
    }
}

impl Multihasher<RustCryptoProvider> {
    /// Hasher over the default provider, restricted by `config`.
    pub fn with_config(config: DigestConfig) -> Self {
        Self::new(RustCryptoProvider::new(config))
    }
}

impl<P: DigestProvider> Multihasher<P> {
    /// Create a hasher over a specific provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Hash `input` with `algorithm` and wrap the digest.
    pub fn hash(&self, algorithm: Algorithm, input: &[u8]) -> CryptoResult<Multihash> {
        let digest = if algorithm.is_identity() {
            input.to_vec()
        } else {
            self.provider.digest(algorithm, input)?
        };
        trace!(%algorithm, input_len = input.len(), "computed digest");
        Ok(Multihash::new(algorithm, digest)?)
    }

    /// Read all of `reader` and hash it.
    ///
    /// Read failures are reported as [`CryptoError::Encoding`].
    pub fn hash_reader<R: Read>(
        &self,
        algorithm: Algorithm,
        mut reader: R,
    ) -> CryptoResult<Multihash> {
        let mut input = Vec::new();
        reader
            .read_to_end(&mut input)
            .map_err(|e| CryptoError::Encoding(e.to_string()))?;
        self.hash(algorithm, &input)
    }

    /// Verify that `input` hashes to `expected` under its own algorithm.
    pub fn verify(&self, input: &[u8], expected: &Multihash) -> CryptoResult<bool> {
        let actual = self.hash(expected.algorithm(), input)?;
        Ok(actual == *expected)
    }
}

/// Hash `input` with the default provider and wrap the result.
pub fn hash_and_wrap(input: &[u8], algorithm: Algorithm) -> CryptoResult<Multihash> {
    Multihasher::<RustCryptoProvider>::default().hash(algorithm, input)
}
