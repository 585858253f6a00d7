//! FALCON (Fast-Fourier Lattice-based Compact Signatures over NTRU)

use crate::{PqCryptoError, Result, SignatureAlgorithm};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use zeroize::Zeroizing;

macro_rules! with_falcon {
    ($alg:expr, $params:ident => $body:expr) => {
        match $alg {
            SignatureAlgorithm::Falcon512 => {
                use pqcrypto_falcon::falcon512 as $params;
                $body
            }
            SignatureAlgorithm::Falcon1024 => {
                use pqcrypto_falcon::falcon1024 as $params;
                $body
            }
            other => Err(PqCryptoError::unsupported(format!(
                "{other} is not a FALCON parameter set"
            ))),
        }
    };
}

pub(crate) fn generate(alg: SignatureAlgorithm) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    with_falcon!(alg, params => {
        let (pk, sk) = params::keypair();
        Ok((pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec())))
    })
}

pub(crate) fn sign(alg: SignatureAlgorithm, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    with_falcon!(alg, params => {
        let sk = params::SecretKey::from_bytes(secret_key)
            .map_err(|e| PqCryptoError::invalid_key(format!("{alg} secret key: {e:?}")))?;
        Ok(params::detached_sign(message, &sk).as_bytes().to_vec())
    })
}

pub(crate) fn verify(
    alg: SignatureAlgorithm,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool> {
    with_falcon!(alg, params => {
        let pk = params::PublicKey::from_bytes(public_key)
            .map_err(|e| PqCryptoError::invalid_key(format!("{alg} public key: {e:?}")))?;
        match params::DetachedSignature::from_bytes(signature) {
            Ok(sig) => Ok(params::verify_detached_signature(&sig, message, &pk).is_ok()),
            Err(_) => Ok(false),
        }
    })
}
