//! Classical signature keys: Ed25519, Ed448, ECDSA over P-256/P-384 and RSA
//!
//! These keys keep their typed representation so the provider crates handle
//! SPKI and PKCS#8 encoding themselves.

use crate::{PqCryptoError, Result, SignatureAlgorithm};
use ed25519_dalek::Signer as _;
use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rand_core::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

/// A classical private key
pub(crate) enum ClassicalKey {
    Ed25519(ed25519_dalek::SigningKey),
    Ed448(Box<ed448_goldilocks_plus::SigningKey>),
    EcP256(p256::ecdsa::SigningKey),
    EcP384(p384::ecdsa::SigningKey),
    Rsa(Box<RsaPrivateKey>),
}

impl ClassicalKey {
    pub(crate) fn generate(alg: SignatureAlgorithm) -> Result<Self> {
        let mut rng = OsRng;
        match alg {
            SignatureAlgorithm::Ed25519 => {
                Ok(Self::Ed25519(ed25519_dalek::SigningKey::generate(&mut rng)))
            }
            SignatureAlgorithm::Ed448 => Ok(Self::Ed448(Box::new(
                ed448_goldilocks_plus::SigningKey::generate(&mut rng),
            ))),
            SignatureAlgorithm::EcP256 => Ok(Self::EcP256(p256::ecdsa::SigningKey::random(&mut rng))),
            SignatureAlgorithm::EcP384 => Ok(Self::EcP384(p384::ecdsa::SigningKey::random(&mut rng))),
            SignatureAlgorithm::Rsa2048 | SignatureAlgorithm::Rsa3072 | SignatureAlgorithm::Rsa4096 => {
                let bits = alg
                    .rsa_bits()
                    .ok_or_else(|| PqCryptoError::internal(format!("{alg} has no modulus size")))?;
                let key = RsaPrivateKey::new(&mut rng, bits)
                    .map_err(|e| PqCryptoError::key_generation_failed(format!("{alg}: {e}")))?;
                Ok(Self::Rsa(Box::new(key)))
            }
            other => Err(PqCryptoError::unsupported(format!(
                "{other} is not a classical algorithm"
            ))),
        }
    }

    /// DER-encoded `SubjectPublicKeyInfo`
    pub(crate) fn public_key_der(&self) -> Result<Vec<u8>> {
        let doc = match self {
            Self::Ed25519(key) => key.verifying_key().to_public_key_der()?,
            Self::Ed448(key) => key.verifying_key().to_public_key_der()?,
            Self::EcP256(key) => key.verifying_key().to_public_key_der()?,
            Self::EcP384(key) => key.verifying_key().to_public_key_der()?,
            Self::Rsa(key) => key.to_public_key().to_public_key_der()?,
        };
        Ok(doc.as_bytes().to_vec())
    }

    /// DER-encoded PKCS#8 `PrivateKeyInfo`
    pub(crate) fn private_key_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let doc = match self {
            Self::Ed25519(key) => key.to_pkcs8_der()?,
            Self::Ed448(key) => key.to_pkcs8_der()?,
            Self::EcP256(key) => key.to_pkcs8_der()?,
            Self::EcP384(key) => key.to_pkcs8_der()?,
            Self::Rsa(key) => key.to_pkcs8_der()?,
        };
        Ok(Zeroizing::new(doc.as_bytes().to_vec()))
    }

    /// Sign `message`; ECDSA signatures are DER `Ecdsa-Sig-Value`
    pub(crate) fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Ed25519(key) => Ok(key.sign(message).to_bytes().to_vec()),
            // Pure Ed448 with an empty context (RFC 8032 section 5.2)
            Self::Ed448(key) => Ok(key.sign_raw(message).to_bytes().to_vec()),
            Self::EcP256(key) => {
                let sig: p256::ecdsa::Signature = key
                    .try_sign(message)
                    .map_err(|e| PqCryptoError::signature_failed(format!("EC-P256: {e}")))?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
            Self::EcP384(key) => {
                let sig: p384::ecdsa::Signature = key
                    .try_sign(message)
                    .map_err(|e| PqCryptoError::signature_failed(format!("EC-P384: {e}")))?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
            Self::Rsa(key) => {
                let signing_key = rsa::pkcs1v15::SigningKey::<Sha256>::new((**key).clone());
                let sig = signing_key
                    .try_sign(message)
                    .map_err(|e| PqCryptoError::signature_failed(format!("RSA: {e}")))?;
                Ok(sig.to_vec())
            }
        }
    }
}

/// Verify a classical signature against the `subjectPublicKey` bytes of an SPKI
///
/// Ed25519 and Ed448 keys are the 32- and 57-byte points, EC keys are SEC1 points and RSA keys
/// are PKCS#1 `RSAPublicKey` structures.
pub(crate) fn verify(
    alg: SignatureAlgorithm,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool> {
    match alg {
        SignatureAlgorithm::Ed25519 => {
            let bytes: &[u8; ed25519_dalek::PUBLIC_KEY_LENGTH] =
                public_key.try_into().map_err(|_| PqCryptoError::InvalidKeySize {
                    expected: ed25519_dalek::PUBLIC_KEY_LENGTH,
                    actual: public_key.len(),
                })?;
            let key = ed25519_dalek::VerifyingKey::from_bytes(bytes)
                .map_err(|e| PqCryptoError::invalid_key(format!("Ed25519: {e}")))?;
            match ed25519_dalek::Signature::from_slice(signature) {
                Ok(sig) => Ok(key.verify_strict(message, &sig).is_ok()),
                Err(_) => Ok(false),
            }
        }
        SignatureAlgorithm::Ed448 => {
            let bytes: &[u8; ed448_goldilocks_plus::PUBLIC_KEY_LENGTH] =
                public_key.try_into().map_err(|_| PqCryptoError::InvalidKeySize {
                    expected: ed448_goldilocks_plus::PUBLIC_KEY_LENGTH,
                    actual: public_key.len(),
                })?;
            let key = ed448_goldilocks_plus::VerifyingKey::from_bytes(bytes)
                .map_err(|e| PqCryptoError::invalid_key(format!("Ed448: {e}")))?;
            match ed448_goldilocks_plus::Signature::try_from(signature) {
                Ok(sig) => Ok(key.verify_raw(&sig, message).is_ok()),
                Err(_) => Ok(false),
            }
        }
        SignatureAlgorithm::EcP256 => {
            let key = p256::ecdsa::VerifyingKey::from_sec1_bytes(public_key)
                .map_err(|e| PqCryptoError::invalid_key(format!("EC-P256: {e}")))?;
            match p256::ecdsa::Signature::from_der(signature) {
                Ok(sig) => Ok(key.verify(message, &sig).is_ok()),
                Err(_) => Ok(false),
            }
        }
        SignatureAlgorithm::EcP384 => {
            let key = p384::ecdsa::VerifyingKey::from_sec1_bytes(public_key)
                .map_err(|e| PqCryptoError::invalid_key(format!("EC-P384: {e}")))?;
            match p384::ecdsa::Signature::from_der(signature) {
                Ok(sig) => Ok(key.verify(message, &sig).is_ok()),
                Err(_) => Ok(false),
            }
        }
        SignatureAlgorithm::Rsa2048 | SignatureAlgorithm::Rsa3072 | SignatureAlgorithm::Rsa4096 => {
            let key = RsaPublicKey::from_pkcs1_der(public_key)
                .map_err(|e| PqCryptoError::invalid_key(format!("RSA: {e}")))?;
            let verifying_key = rsa::pkcs1v15::VerifyingKey::<Sha256>::new(key);
            match rsa::pkcs1v15::Signature::try_from(signature) {
                Ok(sig) => Ok(verifying_key.verify(message, &sig).is_ok()),
                Err(_) => Ok(false),
            }
        }
        other => Err(PqCryptoError::unsupported(format!(
            "{other} is not a classical algorithm"
        ))),
    }
}
