//! Signature key pairs for certificate signing requests
//!
//! This crate generates key pairs for post-quantum and classical signature
//! algorithms and exposes the encodings a CSR needs: the DER
//! `SubjectPublicKeyInfo`, the PKCS#8 private key and raw signatures.
//!
//! # Supported Algorithms
//!
//! - ML-DSA (FIPS 204): ML-DSA-44, ML-DSA-65, ML-DSA-87
//! - SLH-DSA (FIPS 205): SHA2 and SHAKE instances at 128/192/256 bits, each
//!   in "f" (fast) and "s" (small) variants
//! - FALCON: FALCON-512, FALCON-1024
//! - Classical: Ed25519, Ed448, ECDSA P-256/P-384, RSA 2048/3072/4096
//!
//! ```no_run
//! use csrgen_pqcrypto::{KeyPair, SignatureAlgorithm};
//!
//! let alg = SignatureAlgorithm::resolve("ml-dsa-44").ok_or("unknown")?;
//! let key_pair = KeyPair::generate(alg)?;
//! let signature = key_pair.sign(b"hello")?;
//! assert!(key_pair.verify(b"hello", &signature)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod algorithm;
pub mod api;
mod error;
mod keypair;
pub mod oids;
mod signer;

pub use self::algorithm::{AlgorithmFamily, SignatureAlgorithm};
pub use self::api::{GeneratedKeyPair, KeyPairBuilder};
pub use self::error::{PqCryptoError, Result};
pub use self::keypair::KeyPair;

/// Prelude for key pair generation
pub mod prelude {
    pub use super::{AlgorithmFamily, KeyPair, KeyPairBuilder, SignatureAlgorithm};
}
