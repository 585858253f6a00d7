//! SLH-DSA (FIPS 205) stateless hash-based signatures
//!
//! Signing uses the pure variant with an empty context string and hedged
//! randomness.

use crate::{PqCryptoError, Result, SignatureAlgorithm};
use fips205::traits::{SerDes, Signer, Verifier};
use zeroize::Zeroizing;

macro_rules! with_slh_dsa {
    ($alg:expr, $params:ident => $body:expr) => {
        match $alg {
            SignatureAlgorithm::SlhDsaSha2_128f => {
                use fips205::slh_dsa_sha2_128f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaSha2_128s => {
                use fips205::slh_dsa_sha2_128s as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaSha2_192f => {
                use fips205::slh_dsa_sha2_192f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaSha2_192s => {
                use fips205::slh_dsa_sha2_192s as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaSha2_256f => {
                use fips205::slh_dsa_sha2_256f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaSha2_256s => {
                use fips205::slh_dsa_sha2_256s as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake128f => {
                use fips205::slh_dsa_shake_128f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake128s => {
                use fips205::slh_dsa_shake_128s as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake192f => {
                use fips205::slh_dsa_shake_192f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake192s => {
                use fips205::slh_dsa_shake_192s as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake256f => {
                use fips205::slh_dsa_shake_256f as $params;
                $body
            }
            SignatureAlgorithm::SlhDsaShake256s => {
                use fips205::slh_dsa_shake_256s as $params;
                $body
            }
            other => Err(PqCryptoError::unsupported(format!(
                "{other} is not an SLH-DSA parameter set"
            ))),
        }
    };
}

const EMPTY_CONTEXT: &[u8] = b"";

/// Copy a slice into the fixed-size array a parameter set expects
fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| PqCryptoError::InvalidKeySize {
        expected: N,
        actual: bytes.len(),
    })
}

pub(crate) fn generate(alg: SignatureAlgorithm) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    with_slh_dsa!(alg, params => {
        let (pk, sk) = params::try_keygen().map_err(PqCryptoError::key_generation_failed)?;
        Ok((pk.into_bytes().to_vec(), Zeroizing::new(sk.into_bytes().to_vec())))
    })
}

pub(crate) fn sign(alg: SignatureAlgorithm, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    with_slh_dsa!(alg, params => {
        let sk_bytes = Zeroizing::new(to_array::<{ params::SK_LEN }>(secret_key)?);
        let sk = params::PrivateKey::try_from_bytes(&*sk_bytes).map_err(PqCryptoError::invalid_key)?;
        let sig = sk
            .try_sign(message, EMPTY_CONTEXT, true)
            .map_err(PqCryptoError::signature_failed)?;
        Ok(sig.to_vec())
    })
}

pub(crate) fn verify(
    alg: SignatureAlgorithm,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool> {
    with_slh_dsa!(alg, params => {
        let pk = params::PublicKey::try_from_bytes(&to_array(public_key)?)
            .map_err(PqCryptoError::invalid_key)?;
        match to_array(signature) {
            Ok(sig) => Ok(pk.verify(message, &sig, EMPTY_CONTEXT)),
            Err(_) => Ok(false),
        }
    })
}
