//! ML-DSA key generation, signing and verification

use crate::{PqCryptoError, Result, SignatureAlgorithm};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use zeroize::Zeroizing;

macro_rules! with_ml_dsa {
    ($alg:expr, $params:ident => $body:expr) => {
        match $alg {
            SignatureAlgorithm::MlDsa44 => {
                use pqcrypto_mldsa::mldsa44 as $params;
                $body
            }
            SignatureAlgorithm::MlDsa65 => {
                use pqcrypto_mldsa::mldsa65 as $params;
                $body
            }
            SignatureAlgorithm::MlDsa87 => {
                use pqcrypto_mldsa::mldsa87 as $params;
                $body
            }
            other => Err(PqCryptoError::unsupported(format!(
                "{other} is not an ML-DSA parameter set"
            ))),
        }
    };
}

/// Generate a key pair, returning `(public_key, expanded_secret_key)`
pub(crate) fn generate(alg: SignatureAlgorithm) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    with_ml_dsa!(alg, params => {
        let (pk, sk) = params::keypair();
        Ok((pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec())))
    })
}

pub(crate) fn sign(alg: SignatureAlgorithm, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    with_ml_dsa!(alg, params => {
        let sk = params::SecretKey::from_bytes(secret_key)
            .map_err(|e| PqCryptoError::invalid_key(format!("{alg} secret key: {e:?}")))?;
        let sig = params::detached_sign(message, &sk);
        Ok(sig.as_bytes().to_vec())
    })
}

pub(crate) fn verify(
    alg: SignatureAlgorithm,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool> {
    with_ml_dsa!(alg, params => {
        let pk = params::PublicKey::from_bytes(public_key)
            .map_err(|e| PqCryptoError::invalid_key(format!("{alg} public key: {e:?}")))?;
        match params::DetachedSignature::from_bytes(signature) {
            Ok(sig) => Ok(params::verify_detached_signature(&sig, message, &pk).is_ok()),
            Err(_) => Ok(false),
        }
    })
}
