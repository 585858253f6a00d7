//! Generated signing key pairs and their standard encodings

use crate::signer::{self, classical::ClassicalKey};
use crate::{AlgorithmFamily, PqCryptoError, Result, SignatureAlgorithm};
use der::asn1::{BitString, OctetStringRef};
use der::{Decode, Encode};
use sha2::{Digest, Sha256};
use spki::{AlgorithmIdentifierOwned, AlgorithmIdentifierRef, SubjectPublicKeyInfoOwned};
use std::fmt;
use zeroize::Zeroizing;

enum KeyMaterial {
    /// Post-quantum keys held as the provider's raw byte encoding
    Raw {
        public_key: Vec<u8>,
        secret_key: Zeroizing<Vec<u8>>,
    },
    Classical(ClassicalKey),
}

/// A freshly generated key pair for one [`SignatureAlgorithm`]
pub struct KeyPair {
    algorithm: SignatureAlgorithm,
    material: KeyMaterial,
}

impl KeyPair {
    /// Generate a new key pair from the operating system RNG.
    ///
    /// This is CPU-bound; RSA-4096 and the SLH-DSA "s" parameter sets can take
    /// seconds. Use [`crate::KeyPairBuilder`] from async code.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to generate a key or returns a
    /// public key of unexpected length.
    pub fn generate(algorithm: SignatureAlgorithm) -> Result<Self> {
        let material = match algorithm.family() {
            AlgorithmFamily::MlDsa => raw(algorithm, signer::ml_dsa::generate(algorithm)?)?,
            AlgorithmFamily::SlhDsa => raw(algorithm, signer::slh_dsa::generate(algorithm)?)?,
            AlgorithmFamily::Falcon => raw(algorithm, signer::falcon::generate(algorithm)?)?,
            AlgorithmFamily::Ed25519
            | AlgorithmFamily::Ed448
            | AlgorithmFamily::Ec
            | AlgorithmFamily::Rsa => KeyMaterial::Classical(ClassicalKey::generate(algorithm)?),
        };
        tracing::debug!(algorithm = %algorithm, "generated key pair");
        Ok(Self {
            algorithm,
            material,
        })
    }

    /// Algorithm this key pair belongs to
    #[must_use]
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// The public key as a `SubjectPublicKeyInfo` structure
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the structure cannot be built.
    pub fn subject_public_key_info(&self) -> Result<SubjectPublicKeyInfoOwned> {
        match &self.material {
            KeyMaterial::Raw { public_key, .. } => Ok(SubjectPublicKeyInfoOwned {
                algorithm: AlgorithmIdentifierOwned {
                    oid: self.algorithm.public_key_oid(),
                    parameters: None,
                },
                subject_public_key: BitString::from_bytes(public_key)?,
            }),
            KeyMaterial::Classical(key) => {
                Ok(SubjectPublicKeyInfoOwned::from_der(&key.public_key_der()?)?)
            }
        }
    }

    /// DER-encoded `SubjectPublicKeyInfo`
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the structure cannot be serialized.
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        match &self.material {
            KeyMaterial::Raw { .. } => Ok(self.subject_public_key_info()?.to_der()?),
            KeyMaterial::Classical(key) => key.public_key_der(),
        }
    }

    /// DER-encoded PKCS#8 `PrivateKeyInfo`.
    ///
    /// ML-DSA keys carry the expanded secret key wrapped in an OCTET STRING;
    /// SLH-DSA and FALCON keys carry the raw secret key bytes.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the structure cannot be serialized.
    pub fn private_key_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        match &self.material {
            KeyMaterial::Raw { secret_key, .. } => {
                let wrapped;
                let private_key: &[u8] = if self.algorithm.family() == AlgorithmFamily::MlDsa {
                    wrapped = Zeroizing::new(OctetStringRef::new(secret_key)?.to_der()?);
                    &wrapped
                } else {
                    secret_key
                };
                let info = pkcs8::PrivateKeyInfo {
                    algorithm: AlgorithmIdentifierRef {
                        oid: self.algorithm.public_key_oid(),
                        parameters: None,
                    },
                    private_key,
                    public_key: None,
                };
                Ok(Zeroizing::new(info.to_der()?))
            }
            KeyMaterial::Classical(key) => key.private_key_der(),
        }
    }

    /// Sign `message` with the private key
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the key or fails to sign.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = match &self.material {
            KeyMaterial::Raw { secret_key, .. } => match self.algorithm.family() {
                AlgorithmFamily::MlDsa => signer::ml_dsa::sign(self.algorithm, secret_key, message),
                AlgorithmFamily::SlhDsa => {
                    signer::slh_dsa::sign(self.algorithm, secret_key, message)
                }
                AlgorithmFamily::Falcon => signer::falcon::sign(self.algorithm, secret_key, message),
                family => Err(PqCryptoError::internal(format!(
                    "{family} key stored as raw bytes"
                ))),
            },
            KeyMaterial::Classical(key) => key.sign(message),
        }?;
        tracing::trace!(
            algorithm = %self.algorithm,
            message_len = message.len(),
            signature_len = signature.len(),
            "signed message"
        );
        Ok(signature)
    }

    /// Verify a signature made by this key pair
    ///
    /// # Errors
    ///
    /// Returns an error if the public key cannot be decoded.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let spki = self.subject_public_key_info()?;
        self.algorithm
            .verify(spki.subject_public_key.raw_bytes(), message, signature)
    }

    /// Lowercase hex SHA-256 of the DER `SubjectPublicKeyInfo`
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the public key cannot be serialized.
    pub fn public_key_fingerprint(&self) -> Result<String> {
        Ok(hex::encode(Sha256::digest(self.public_key_der()?)))
    }
}

fn raw(
    algorithm: SignatureAlgorithm,
    (public_key, secret_key): (Vec<u8>, Zeroizing<Vec<u8>>),
) -> Result<KeyMaterial> {
    if let Some(expected) = algorithm.raw_public_key_size() {
        if public_key.len() != expected {
            return Err(PqCryptoError::InvalidKeySize {
                expected,
                actual: public_key.len(),
            });
        }
    }
    Ok(KeyMaterial::Raw {
        public_key,
        secret_key,
    })
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("algorithm", &self.algorithm)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
