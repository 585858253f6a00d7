//! PEM framing and artifact output

use crate::{CertificationRequest, Result};
use csrgen_common::{write_private_file, write_public_file};
use der::pem::LineEnding;
use std::path::Path;
use zeroize::Zeroizing;

/// PEM label for PKCS#10 requests
pub const CSR_LABEL: &str = "CERTIFICATE REQUEST";
/// PEM label for PKCS#8 private keys
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Encode DER bytes under `label`
///
/// # Errors
///
/// Returns an encoding error if PEM framing fails.
pub fn encode(label: &str, der: &[u8]) -> Result<String> {
    Ok(der::pem::encode_string(label, LineEnding::LF, der).map_err(der::Error::from)?)
}

/// Decode a PEM block, requiring `label`
///
/// # Errors
///
/// Returns an encoding error for malformed PEM or a different label.
pub fn decode(label: &str, pem: &str) -> Result<Vec<u8>> {
    let (found, der) = der::pem::decode_vec(pem.trim().as_bytes()).map_err(der::Error::from)?;
    if found != label {
        return Err(der::Error::from(der::pem::Error::Label).into());
    }
    Ok(der)
}

/// PEM-encode a PKCS#8 private key, zeroizing the text on drop
///
/// # Errors
///
/// Returns an encoding error if PEM framing fails.
pub fn private_key_pem(pkcs8_der: &[u8]) -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(encode(PRIVATE_KEY_LABEL, pkcs8_der)?))
}

/// Write a request as PEM to `path`
///
/// # Errors
///
/// Returns an IO or encoding error.
pub async fn write_csr(path: &Path, request: &CertificationRequest) -> Result<usize> {
    let pem = request.to_pem()?;
    write_public_file(path, pem.as_bytes()).await?;
    Ok(pem.len())
}

/// Write a PKCS#8 private key as PEM to `path`, readable by the owner only
///
/// # Errors
///
/// Returns an IO or encoding error.
pub async fn write_private_key(path: &Path, pkcs8_der: &[u8]) -> Result<usize> {
    let pem = private_key_pem(pkcs8_der)?;
    write_private_file(path, pem.as_bytes()).await?;
    Ok(pem.len())
}
