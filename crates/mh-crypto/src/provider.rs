use digest::Digest;
use mh_types::{Algorithm, DigestLength};
use tracing::debug;

use crate::config::DigestConfig;
use crate::error::{CryptoError, CryptoResult};

/// Source of raw digests for registry algorithms.
///
/// Implementations wrap an existing cryptographic library; no hashing is
/// implemented in this workspace.
pub trait DigestProvider {
    /// Whether `algorithm` can be computed by this provider.
    fn supports(&self, algorithm: Algorithm) -> bool;

    /// Compute the raw digest of `input`.
    fn digest(&self, algorithm: Algorithm, input: &[u8]) -> CryptoResult<Vec<u8>>;
}

/// Digest provider backed by the RustCrypto hash crates and `blake3`.
///
/// SHA3-224 and Keccak-224 are listed in the registry at 24 bytes, but the
/// primitives produce 28; those entries are reported as unsupported.
#[derive(Clone, Debug, Default)]
pub struct RustCryptoProvider {
    config: DigestConfig,
}

impl RustCryptoProvider {
    /// Provider restricted to the algorithms enabled in `config`.
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }
}

impl DigestProvider for RustCryptoProvider {
    fn supports(&self, algorithm: Algorithm) -> bool {
        self.config.is_enabled(algorithm) && fits_registry(algorithm)
    }

    fn digest(&self, algorithm: Algorithm, input: &[u8]) -> CryptoResult<Vec<u8>> {
        if !self.config.is_enabled(algorithm) {
            debug!(%algorithm, "digest algorithm disabled by configuration");
            return Err(CryptoError::UnsupportedAlgorithm(algorithm));
        }
        if !fits_registry(algorithm) {
            debug!(
                %algorithm,
                output_len = output_len(algorithm),
                "primitive output does not fit the registry length"
            );
            return Err(CryptoError::UnsupportedAlgorithm(algorithm));
        }

        let digest = match algorithm {
            Algorithm::Identity => input.to_vec(),
            Algorithm::Md5 => compute::<md5::Md5>(input),
            Algorithm::Sha1 => compute::<sha1::Sha1>(input),
            Algorithm::Sha2_256 => compute::<sha2::Sha256>(input),
            Algorithm::Sha2_512 => compute::<sha2::Sha512>(input),
            Algorithm::Sha3_224 => compute::<sha3::Sha3_224>(input),
            Algorithm::Sha3_256 => compute::<sha3::Sha3_256>(input),
            Algorithm::Sha3_384 => compute::<sha3::Sha3_384>(input),
            Algorithm::Sha3_512 => compute::<sha3::Sha3_512>(input),
            Algorithm::Keccak224 => compute::<sha3::Keccak224>(input),
            Algorithm::Keccak256 => compute::<sha3::Keccak256>(input),
            Algorithm::Keccak384 => compute::<sha3::Keccak384>(input),
            Algorithm::Keccak512 => compute::<sha3::Keccak512>(input),
            Algorithm::Blake2b => compute::<blake2::Blake2b512>(input),
            Algorithm::Blake2s => compute::<blake2::Blake2s256>(input),
            Algorithm::Blake3 => blake3::hash(input).as_bytes().to_vec(),
        };
        Ok(digest)
    }
}

fn compute<D: Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

/// Output size of the backing primitive; identity reports zero.
fn output_len(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Identity => 0,
        Algorithm::Md5 => md5::Md5::output_size(),
        Algorithm::Sha1 => sha1::Sha1::output_size(),
        Algorithm::Sha2_256 => sha2::Sha256::output_size(),
        Algorithm::Sha2_512 => sha2::Sha512::output_size(),
        Algorithm::Sha3_224 => sha3::Sha3_224::output_size(),
        Algorithm::Sha3_256 => sha3::Sha3_256::output_size(),
        Algorithm::Sha3_384 => sha3::Sha3_384::output_size(),
        Algorithm::Sha3_512 => sha3::Sha3_512::output_size(),
        Algorithm::Keccak224 => sha3::Keccak224::output_size(),
        Algorithm::Keccak256 => sha3::Keccak256::output_size(),
        Algorithm::Keccak384 => sha3::Keccak384::output_size(),
        Algorithm::Keccak512 => sha3::Keccak512::output_size(),
        Algorithm::Blake2b => blake2::Blake2b512::output_size(),
        Algorithm::Blake2s => blake2::Blake2s256::output_size(),
        Algorithm::Blake3 => blake3::OUT_LEN,
    }
}

/// Whether the primitive's output can be wrapped under the registry entry.
fn fits_registry(algorithm: Algorithm) -> bool {
    match algorithm.digest_len() {
        DigestLength::Fixed(expected) => output_len(algorithm) == expected,
        DigestLength::Variable { .. } => true,
    }
}
