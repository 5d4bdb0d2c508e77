//! Self-describing digests.
//!
//! A multihash prefixes a raw digest with a one-byte algorithm type code and
//! a one-byte length, so a consumer can tell which hash produced a byte
//! sequence without external metadata. This crate defines the value type and
//! its encodings; it does not compute digests (see `mh-crypto`).
//!
//! # Key Types
//!
//! - [`Algorithm`]: Closed registry of supported hash algorithms and their type codes
//! - [`DigestLength`]: Fixed digest length, or the identity algorithm's variable cap
//! - [`Multihash`]: Validated, immutable `(algorithm, digest)` value
//! - [`MultihashError`]: Every failure raised while building or parsing
//!
//! # Encodings
//!
//! - Binary: `[type][length][digest]`, via [`Multihash::to_bytes`] / [`Multihash::from_bytes`]
//!   and the streaming [`Multihash::write_to`] / [`Multihash::read_from`]
//! - Hex (lowercase): [`Multihash::to_hex`] / [`Multihash::from_hex`]
//! - Base-58, the canonical text form: [`Multihash::to_base58`] / [`Multihash::from_base58`]
//! - Multibase: [`Multihash::decode`] / [`Multihash::to_multibase`]

pub mod error;
pub mod multihash;
pub mod registry;
pub mod stream;
pub mod text;

pub use error::{LengthViolation, MultihashError, MultihashResult};
pub use multihash::{Multihash, HEADER_LEN, MAX_DIGEST_LEN};
pub use registry::{lookup, Algorithm, DigestLength, IDENTITY_MAX_LEN};
pub use text::Base;
