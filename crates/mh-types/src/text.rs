//! Multibase text glue.
//!
//! Detection of the textual base is delegated to the `multibase` crate; this
//! module only decides when a string is a legacy bare base-58 multihash.

use tracing::trace;

pub use multibase::Base;

use crate::error::MultihashResult;
use crate::multihash::Multihash;

/// Length of a bare base-58 SHA2-256 multihash (`Qm...`).
const LEGACY_BASE58_LEN: usize = 46;

impl Multihash {
    /// Decode either a legacy bare base-58 string (`Qm...`, 46 characters)
    /// or any multibase-prefixed string (`z` base58btc, `k` base36,
    /// `f` base16, `b` base32, ...).
    pub fn decode(s: &str) -> MultihashResult<Self> {
        if s.len() == LEGACY_BASE58_LEN && s.starts_with("Qm") {
            trace!(input = s, "decoding legacy base58 multihash");
            return Self::from_base58(s);
        }
        let (base, bytes) = multibase::decode(s)?;
        trace!(?base, len = bytes.len(), "decoded multibase multihash");
        Self::from_bytes(&bytes)
    }

    /// Encode the binary form with a multibase prefix.
    pub fn to_multibase(&self, base: Base) -> String {
        multibase::encode(base, self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MultihashError;
    use crate::registry::Algorithm;

    const PAIRS: [(&str, &str); 2] = [
        (
            "QmPZ9gcCEpqKTo6aq61g2nXGUhM4iCL3ewB6LDXZCtioEB",
            "kmue2y4illvr0m3lt8x6z8iwghtxlzdmkjh957p5rr5cdr9243ugc",
        ),
        (
            "QmatmE9msSfkKxoffpHwNLNKgwZG8eT9Bud6YoPab52vpy",
            "kmuia3qyasz2z5cnz848bag5n5wfc7gzi35cz2npamtmkyifd5anu",
        ),
    ];

    #[test]
    fn base58_and_base36_decode_to_same_value() {
        for (b58, b36) in PAIRS {
            let from_b58 = Multihash::decode(b58).unwrap();
            let from_b36 = Multihash::decode(b36).unwrap();
            assert_eq!(from_b58, from_b36);
            assert_eq!(from_b58.algorithm(), Algorithm::Sha2_256);
        }
    }

    #[test]
    fn legacy_base58_reencodes_identically() {
        for (b58, _) in PAIRS {
            assert_eq!(Multihash::decode(b58).unwrap().to_base58(), b58);
        }
    }

    #[test]
    fn multibase_roundtrip() {
        let mh = Multihash::decode(PAIRS[0].0).unwrap();
        for base in [Base::Base58Btc, Base::Base36Lower, Base::Base16Lower, Base::Base32Lower] {
            let encoded = mh.to_multibase(base);
            assert_eq!(Multihash::decode(&encoded).unwrap(), mh, "{base:?}");
        }
        assert!(mh.to_multibase(Base::Base58Btc).starts_with('z'));
        assert_eq!(mh.to_multibase(Base::Base36Lower), PAIRS[0].1);
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        let err = Multihash::decode("!notbase").unwrap_err();
        assert!(matches!(err, MultihashError::Multibase(_)));
    }

    #[test]
    fn short_identity_goes_through_multibase() {
        let mh = Multihash::identity(b"hi".to_vec()).unwrap();
        let encoded = mh.to_multibase(Base::Base58Btc);
        assert_eq!(Multihash::decode(&encoded).unwrap(), mh);
    }
}
