//! Key pair generation builder

use super::states::{BuilderState, HasAlgorithm, NeedAlgorithm};
use crate::{KeyPair, PqCryptoError, Result, SignatureAlgorithm};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Builder that generates a [`KeyPair`] off the async runtime
///
/// ```no_run
/// # async fn demo() -> csrgen_pqcrypto::Result<()> {
/// use csrgen_pqcrypto::{KeyPairBuilder, SignatureAlgorithm};
///
/// let generated = KeyPairBuilder::new()
///     .algorithm(SignatureAlgorithm::MlDsa65)
///     .generate()
///     .await?;
/// println!("{} in {:?}", generated.key_pair.algorithm(), generated.elapsed);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyPairBuilder<State: BuilderState = NeedAlgorithm> {
    algorithm: Option<SignatureAlgorithm>,
    state: PhantomData<State>,
}

/// A generated key pair together with how long generation took
#[derive(Debug)]
pub struct GeneratedKeyPair {
    /// The new key pair
    pub key_pair: KeyPair,
    /// Wall-clock generation time
    pub elapsed: Duration,
}

impl KeyPairBuilder<NeedAlgorithm> {
    /// Create a builder with no algorithm selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: None,
            state: PhantomData,
        }
    }

    /// Select the signature algorithm
    #[must_use]
    pub fn algorithm(self, algorithm: SignatureAlgorithm) -> KeyPairBuilder<HasAlgorithm> {
        KeyPairBuilder {
            algorithm: Some(algorithm),
            state: PhantomData,
        }
    }
}

impl Default for KeyPairBuilder<NeedAlgorithm> {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPairBuilder<HasAlgorithm> {
    /// Generate the key pair on the blocking thread pool
    ///
    /// # Errors
    ///
    /// Returns the generation error, or an internal error if the blocking
    /// task panicked or was cancelled.
    pub async fn generate(self) -> Result<GeneratedKeyPair> {
        let algorithm = self
            .algorithm
            .ok_or_else(|| PqCryptoError::internal("algorithm not set"))?;
        tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let key_pair = KeyPair::generate(algorithm)?;
            Ok(GeneratedKeyPair {
                key_pair,
                elapsed: start.elapsed(),
            })
        })
        .await
        .map_err(|e| PqCryptoError::internal(format!("key generation task failed: {e}")))?
    }
}
