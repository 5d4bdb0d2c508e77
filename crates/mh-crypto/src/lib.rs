//! Digest computation for multihashes.
//!
//! Wraps the RustCrypto hash crates and BLAKE3 behind a [`DigestProvider`]
//! seam and turns their output into validated [`mh_types::Multihash`] values.
//!
//! Every digest comes from an established library; nothing is hand-rolled.

pub mod config;
pub mod error;
pub mod hasher;
pub mod provider;

pub use config::DigestConfig;
pub use error::{CryptoError, CryptoResult};
pub use hasher::{hash_and_wrap, Multihasher};
pub use provider::{DigestProvider, RustCryptoProvider};
