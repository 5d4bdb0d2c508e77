use std::collections::BTreeSet;

use mh_types::Algorithm;
use serde::{Deserialize, Serialize};

/// Configuration for the default digest provider.
///
/// Algorithms missing from `enabled` are reported as unsupported, the same
/// way a host crypto library without that primitive would behave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Algorithms the provider will compute.
    pub enabled: BTreeSet<Algorithm>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            enabled: Algorithm::ALL.into_iter().collect(),
        }
    }
}

impl DigestConfig {
    /// Enable only the given algorithms.
    pub fn only(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        Self {
            enabled: algorithms.into_iter().collect(),
        }
    }

    /// Every algorithm except the given ones.
    ///
    /// Useful for deployments that must refuse legacy primitives such as MD5
    /// or SHA-1.
    pub fn without(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        let mut config = Self::default();
        for algorithm in algorithms {
            config.enabled.remove(&algorithm);
        }
        config
    }

    /// Returns `true` if the algorithm may be computed.
    pub fn is_enabled(&self, algorithm: Algorithm) -> bool {
        self.enabled.contains(&algorithm)
    }
}
