//! Algorithm table for CSR key pairs
//!
//! Every supported signature algorithm appears exactly once in
//! [`SignatureAlgorithm::ALL`], in the order used for listings and batch
//! generation.

use crate::{PqCryptoError, Result, oids, signer};
use const_oid::ObjectIdentifier;
use der::asn1::{Any, Null};
use serde::{Deserialize, Serialize};
use spki::AlgorithmIdentifierOwned;
use std::fmt;
use std::str::FromStr;

/// Key-pair generator family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmFamily {
    /// Module-lattice signatures (FIPS 204)
    #[serde(rename = "ML-DSA")]
    MlDsa,
    /// Stateless hash-based signatures (FIPS 205)
    #[serde(rename = "SLH-DSA")]
    SlhDsa,
    /// NTRU-lattice signatures, pending standardisation as FN-DSA
    #[serde(rename = "Falcon")]
    Falcon,
    /// Edwards-curve signatures over Curve25519
    #[serde(rename = "Ed25519")]
    Ed25519,
    /// Edwards-curve signatures over Curve448
    #[serde(rename = "Ed448")]
    Ed448,
    /// ECDSA over NIST prime curves
    #[serde(rename = "EC")]
    Ec,
    /// RSASSA-PKCS1-v1_5
    #[serde(rename = "RSA")]
    Rsa,
}

impl AlgorithmFamily {
    /// Whether the family resists attacks by quantum computers
    #[must_use]
    pub fn is_post_quantum(&self) -> bool {
        matches!(self, Self::MlDsa | Self::SlhDsa | Self::Falcon)
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MlDsa => write!(f, "ML-DSA"),
            Self::SlhDsa => write!(f, "SLH-DSA"),
            Self::Falcon => write!(f, "Falcon"),
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::Ed448 => write!(f, "Ed448"),
            Self::Ec => write!(f, "EC"),
            Self::Rsa => write!(f, "RSA"),
        }
    }
}

/// Signature algorithms a CSR can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    /// ML-DSA-44 (NIST security level 2)
    #[serde(rename = "ML-DSA-44")]
    MlDsa44,
    /// ML-DSA-65 (NIST security level 3)
    #[serde(rename = "ML-DSA-65")]
    MlDsa65,
    /// ML-DSA-87 (NIST security level 5)
    #[serde(rename = "ML-DSA-87")]
    MlDsa87,

    /// SLH-DSA-SHA2-128f (level 1, fast signing)
    #[serde(rename = "SLH-DSA-SHA2-128f")]
    SlhDsaSha2_128f,
    /// SLH-DSA-SHA2-128s (level 1, small signature)
    #[serde(rename = "SLH-DSA-SHA2-128s")]
    SlhDsaSha2_128s,
    /// SLH-DSA-SHA2-192f (level 3, fast signing)
    #[serde(rename = "SLH-DSA-SHA2-192f")]
    SlhDsaSha2_192f,
    /// SLH-DSA-SHA2-192s (level 3, small signature)
    #[serde(rename = "SLH-DSA-SHA2-192s")]
    SlhDsaSha2_192s,
    /// SLH-DSA-SHA2-256f (level 5, fast signing)
    #[serde(rename = "SLH-DSA-SHA2-256f")]
    SlhDsaSha2_256f,
    /// SLH-DSA-SHA2-256s (level 5, small signature)
    #[serde(rename = "SLH-DSA-SHA2-256s")]
    SlhDsaSha2_256s,
    /// SLH-DSA-SHAKE-128f (level 1, fast signing)
    #[serde(rename = "SLH-DSA-SHAKE-128f")]
    SlhDsaShake128f,
    /// SLH-DSA-SHAKE-128s (level 1, small signature)
    #[serde(rename = "SLH-DSA-SHAKE-128s")]
    SlhDsaShake128s,
    /// SLH-DSA-SHAKE-192f (level 3, fast signing)
    #[serde(rename = "SLH-DSA-SHAKE-192f")]
    SlhDsaShake192f,
    /// SLH-DSA-SHAKE-192s (level 3, small signature)
    #[serde(rename = "SLH-DSA-SHAKE-192s")]
    SlhDsaShake192s,
    /// SLH-DSA-SHAKE-256f (level 5, fast signing)
    #[serde(rename = "SLH-DSA-SHAKE-256f")]
    SlhDsaShake256f,
    /// SLH-DSA-SHAKE-256s (level 5, small signature)
    #[serde(rename = "SLH-DSA-SHAKE-256s")]
    SlhDsaShake256s,

    /// FALCON-512 (NIST security level 1)
    #[serde(rename = "FALCON-512")]
    Falcon512,
    /// FALCON-1024 (NIST security level 5)
    #[serde(rename = "FALCON-1024")]
    Falcon1024,

    /// Ed25519 (RFC 8410)
    #[serde(rename = "Ed25519")]
    Ed25519,
    /// Ed448 (RFC 8410)
    #[serde(rename = "Ed448")]
    Ed448,
    /// ECDSA P-256 with SHA-256
    #[serde(rename = "EC-P256")]
    EcP256,
    /// ECDSA P-384 with SHA-384
    #[serde(rename = "EC-P384")]
    EcP384,
    /// RSA 2048-bit, e = 65537, SHA-256 PKCS#1 v1.5
    #[serde(rename = "RSA-2048")]
    Rsa2048,
    /// RSA 3072-bit, e = 65537, SHA-256 PKCS#1 v1.5
    #[serde(rename = "RSA-3072")]
    Rsa3072,
    /// RSA 4096-bit, e = 65537, SHA-256 PKCS#1 v1.5
    #[serde(rename = "RSA-4096")]
    Rsa4096,
}

impl SignatureAlgorithm {
    /// Every supported algorithm in listing order
    pub const ALL: [Self; 24] = [
        Self::MlDsa44,
        Self::MlDsa65,
        Self::MlDsa87,
        Self::SlhDsaSha2_128f,
        Self::SlhDsaSha2_128s,
        Self::SlhDsaSha2_192f,
        Self::SlhDsaSha2_192s,
        Self::SlhDsaSha2_256f,
        Self::SlhDsaSha2_256s,
        Self::SlhDsaShake128f,
        Self::SlhDsaShake128s,
        Self::SlhDsaShake192f,
        Self::SlhDsaShake192s,
        Self::SlhDsaShake256f,
        Self::SlhDsaShake256s,
        Self::Falcon512,
        Self::Falcon1024,
        Self::Ed25519,
        Self::Ed448,
        Self::EcP256,
        Self::EcP384,
        Self::Rsa2048,
        Self::Rsa3072,
        Self::Rsa4096,
    ];

    /// Iterate over the table in listing order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Resolve a user-supplied name.
    ///
    /// An exact match on the canonical name wins; otherwise the first
    /// case-insensitive match is returned.
    #[must_use]
    pub fn resolve(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all()
            .find(|alg| alg.name() == input)
            .or_else(|| Self::all().find(|alg| alg.name().eq_ignore_ascii_case(input)))
    }

    /// Canonical display name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
            Self::SlhDsaSha2_128f => "SLH-DSA-SHA2-128f",
            Self::SlhDsaSha2_128s => "SLH-DSA-SHA2-128s",
            Self::SlhDsaSha2_192f => "SLH-DSA-SHA2-192f",
            Self::SlhDsaSha2_192s => "SLH-DSA-SHA2-192s",
            Self::SlhDsaSha2_256f => "SLH-DSA-SHA2-256f",
            Self::SlhDsaSha2_256s => "SLH-DSA-SHA2-256s",
            Self::SlhDsaShake128f => "SLH-DSA-SHAKE-128f",
            Self::SlhDsaShake128s => "SLH-DSA-SHAKE-128s",
            Self::SlhDsaShake192f => "SLH-DSA-SHAKE-192f",
            Self::SlhDsaShake192s => "SLH-DSA-SHAKE-192s",
            Self::SlhDsaShake256f => "SLH-DSA-SHAKE-256f",
            Self::SlhDsaShake256s => "SLH-DSA-SHAKE-256s",
            Self::Falcon512 => "FALCON-512",
            Self::Falcon1024 => "FALCON-1024",
            Self::Ed25519 => "Ed25519",
            Self::Ed448 => "Ed448",
            Self::EcP256 => "EC-P256",
            Self::EcP384 => "EC-P384",
            Self::Rsa2048 => "RSA-2048",
            Self::Rsa3072 => "RSA-3072",
            Self::Rsa4096 => "RSA-4096",
        }
    }

    /// Key-pair generator family
    #[must_use]
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Self::MlDsa44 | Self::MlDsa65 | Self::MlDsa87 => AlgorithmFamily::MlDsa,
            Self::SlhDsaSha2_128f
            | Self::SlhDsaSha2_128s
            | Self::SlhDsaSha2_192f
            | Self::SlhDsaSha2_192s
            | Self::SlhDsaSha2_256f
            | Self::SlhDsaSha2_256s
            | Self::SlhDsaShake128f
            | Self::SlhDsaShake128s
            | Self::SlhDsaShake192f
            | Self::SlhDsaShake192s
            | Self::SlhDsaShake256f
            | Self::SlhDsaShake256s => AlgorithmFamily::SlhDsa,
            Self::Falcon512 | Self::Falcon1024 => AlgorithmFamily::Falcon,
            Self::Ed25519 => AlgorithmFamily::Ed25519,
            Self::Ed448 => AlgorithmFamily::Ed448,
            Self::EcP256 | Self::EcP384 => AlgorithmFamily::Ec,
            Self::Rsa2048 | Self::Rsa3072 | Self::Rsa4096 => AlgorithmFamily::Rsa,
        }
    }

    /// Whether the algorithm resists attacks by quantum computers
    #[must_use]
    pub fn is_post_quantum(&self) -> bool {
        self.family().is_post_quantum()
    }

    /// NIST PQC security category, `None` for classical algorithms
    #[must_use]
    pub fn nist_level(&self) -> Option<u8> {
        match self {
            Self::MlDsa44 => Some(2),
            Self::Falcon512
            | Self::SlhDsaSha2_128f
            | Self::SlhDsaSha2_128s
            | Self::SlhDsaShake128f
            | Self::SlhDsaShake128s => Some(1),
            Self::MlDsa65
            | Self::SlhDsaSha2_192f
            | Self::SlhDsaSha2_192s
            | Self::SlhDsaShake192f
            | Self::SlhDsaShake192s => Some(3),
            Self::MlDsa87
            | Self::Falcon1024
            | Self::SlhDsaSha2_256f
            | Self::SlhDsaSha2_256s
            | Self::SlhDsaShake256f
            | Self::SlhDsaShake256s => Some(5),
            Self::Ed25519
            | Self::Ed448
            | Self::EcP256
            | Self::EcP384
            | Self::Rsa2048
            | Self::Rsa3072
            | Self::Rsa4096 => None,
        }
    }

    /// Raw public key length for post-quantum algorithms
    #[must_use]
    pub fn raw_public_key_size(&self) -> Option<usize> {
        match self {
            Self::MlDsa44 => Some(1312),
            Self::MlDsa65 => Some(1952),
            Self::MlDsa87 => Some(2592),
            Self::Falcon512 => Some(897),
            Self::Falcon1024 => Some(1793),
            Self::SlhDsaSha2_128f
            | Self::SlhDsaSha2_128s
            | Self::SlhDsaShake128f
            | Self::SlhDsaShake128s => Some(32),
            Self::SlhDsaSha2_192f
            | Self::SlhDsaSha2_192s
            | Self::SlhDsaShake192f
            | Self::SlhDsaShake192s => Some(48),
            Self::SlhDsaSha2_256f
            | Self::SlhDsaSha2_256s
            | Self::SlhDsaShake256f
            | Self::SlhDsaShake256s => Some(64),
            Self::Ed25519
            | Self::Ed448
            | Self::EcP256
            | Self::EcP384
            | Self::Rsa2048
            | Self::Rsa3072
            | Self::Rsa4096 => None,
        }
    }

    /// RSA modulus size in bits
    #[must_use]
    pub fn rsa_bits(&self) -> Option<usize> {
        match self {
            Self::Rsa2048 => Some(2048),
            Self::Rsa3072 => Some(3072),
            Self::Rsa4096 => Some(4096),
            _ => None,
        }
    }

    /// Base file name for generated artifacts: lowercase, `-` replaced by `_`
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.name().to_lowercase().replace('-', "_")
    }

    /// OID identifying the signature algorithm in `CertificationRequest.signatureAlgorithm`
    #[must_use]
    pub fn signature_oid(&self) -> ObjectIdentifier {
        match self {
            Self::MlDsa44 => oids::ML_DSA_44,
            Self::MlDsa65 => oids::ML_DSA_65,
            Self::MlDsa87 => oids::ML_DSA_87,
            Self::SlhDsaSha2_128f => oids::SLH_DSA_SHA2_128F,
            Self::SlhDsaSha2_128s => oids::SLH_DSA_SHA2_128S,
            Self::SlhDsaSha2_192f => oids::SLH_DSA_SHA2_192F,
            Self::SlhDsaSha2_192s => oids::SLH_DSA_SHA2_192S,
            Self::SlhDsaSha2_256f => oids::SLH_DSA_SHA2_256F,
            Self::SlhDsaSha2_256s => oids::SLH_DSA_SHA2_256S,
            Self::SlhDsaShake128f => oids::SLH_DSA_SHAKE_128F,
            Self::SlhDsaShake128s => oids::SLH_DSA_SHAKE_128S,
            Self::SlhDsaShake192f => oids::SLH_DSA_SHAKE_192F,
            Self::SlhDsaShake192s => oids::SLH_DSA_SHAKE_192S,
            Self::SlhDsaShake256f => oids::SLH_DSA_SHAKE_256F,
            Self::SlhDsaShake256s => oids::SLH_DSA_SHAKE_256S,
            Self::Falcon512 => oids::FALCON_512,
            Self::Falcon1024 => oids::FALCON_1024,
            Self::Ed25519 => oids::ED25519,
            Self::Ed448 => oids::ED448,
            Self::EcP256 => oids::ECDSA_WITH_SHA256,
            Self::EcP384 => oids::ECDSA_WITH_SHA384,
            Self::Rsa2048 | Self::Rsa3072 | Self::Rsa4096 => oids::SHA256_WITH_RSA,
        }
    }

    /// OID of the `SubjectPublicKeyInfo.algorithm` field
    ///
    /// Post-quantum and EdDSA algorithms reuse the signature OID.
    #[must_use]
    pub fn public_key_oid(&self) -> ObjectIdentifier {
        match self.family() {
            AlgorithmFamily::Ec => oids::EC_PUBLIC_KEY,
            AlgorithmFamily::Rsa => oids::RSA_ENCRYPTION,
            _ => self.signature_oid(),
        }
    }

    /// `AlgorithmIdentifier` for the CSR signature
    ///
    /// Parameters are absent except for RSA, which carries an explicit NULL.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the NULL parameter cannot be encoded.
    pub fn signature_algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned> {
        let parameters = match self.family() {
            AlgorithmFamily::Rsa => Some(Any::encode_from(&Null)?),
            _ => None,
        };
        Ok(AlgorithmIdentifierOwned {
            oid: self.signature_oid(),
            parameters,
        })
    }

    /// Reverse lookup from a signature algorithm OID.
    ///
    /// RSA entries share one OID; the first table entry is returned, which
    /// verifies identically for any modulus size.
    #[must_use]
    pub fn from_signature_oid(oid: &ObjectIdentifier) -> Option<Self> {
        Self::all().find(|alg| alg.signature_oid() == *oid)
    }

    /// Verify `signature` over `message` with a public key taken from the
    /// `subjectPublicKey` bit string of an SPKI.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify.
    ///
    /// # Errors
    ///
    /// Returns an error if the public key cannot be decoded for this
    /// algorithm.
    pub fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        match self.family() {
            AlgorithmFamily::MlDsa => signer::ml_dsa::verify(*self, public_key, message, signature),
            AlgorithmFamily::SlhDsa => {
                signer::slh_dsa::verify(*self, public_key, message, signature)
            }
            AlgorithmFamily::Falcon => signer::falcon::verify(*self, public_key, message, signature),
            AlgorithmFamily::Ed25519
            | AlgorithmFamily::Ed448
            | AlgorithmFamily::Ec
            | AlgorithmFamily::Rsa => {
                signer::classical::verify(*self, public_key, message, signature)
            }
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = PqCryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s).ok_or_else(|| PqCryptoError::unsupported(s))
    }
}
