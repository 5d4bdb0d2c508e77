use mh_types::{Algorithm, MultihashError};
use thiserror::Error;

/// Errors from digest computation.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("no digest implementation available for {0}")]
    UnsupportedAlgorithm(Algorithm),

    #[error("could not read input bytes: {0}")]
    Encoding(String),

    #[error(transparent)]
    Multihash(#[from] MultihashError),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
