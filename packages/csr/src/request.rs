//! Parsed or freshly signed certification requests

use crate::{CsrError, Result, oids, pem};
use csrgen_pqcrypto::SignatureAlgorithm;
use der::{Decode, Encode};
use x509_cert::ext::Extension;
use x509_cert::ext::pkix::SubjectAltName;
use x509_cert::ext::pkix::name::GeneralName;
use x509_cert::name::Name;
use x509_cert::request::CertReq;

/// A PKCS#10 `CertificationRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRequest {
    inner: CertReq,
}

impl CertificationRequest {
    /// Parse a DER-encoded request
    ///
    /// # Errors
    ///
    /// Returns an encoding error for malformed input.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        Ok(Self {
            inner: CertReq::from_der(der)?,
        })
    }

    /// Parse a `CERTIFICATE REQUEST` PEM block
    ///
    /// # Errors
    ///
    /// Returns an encoding error for a wrong label or malformed content.
    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::from_der(&pem::decode(pem::CSR_LABEL, pem)?)
    }

    /// DER encoding
    ///
    /// # Errors
    ///
    /// Returns an encoding error if serialization fails.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(self.inner.to_der()?)
    }

    /// PEM encoding with LF line endings
    ///
    /// # Errors
    ///
    /// Returns an encoding error if serialization fails.
    pub fn to_pem(&self) -> Result<String> {
        pem::encode(pem::CSR_LABEL, &self.to_der()?)
    }

    /// Requested subject
    #[must_use]
    pub fn subject(&self) -> &Name {
        &self.inner.info.subject
    }

    /// Signature algorithm named by the request
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::UnsupportedSignatureAlgorithm`] for OIDs outside
    /// the algorithm table.
    pub fn signature_algorithm(&self) -> Result<SignatureAlgorithm> {
        let oid = self.inner.algorithm.oid;
        SignatureAlgorithm::from_signature_oid(&oid)
            .ok_or_else(|| CsrError::UnsupportedSignatureAlgorithm(oid.to_string()))
    }

    /// Names from the requested `subjectAltName` extension, empty if absent
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the extension request is malformed.
    pub fn subject_alt_names(&self) -> Result<Vec<GeneralName>> {
        let mut names = Vec::new();
        for attribute in self.inner.info.attributes.iter() {
            if attribute.oid != oids::EXTENSION_REQUEST {
                continue;
            }
            for value in attribute.values.iter() {
                let extensions: Vec<Extension> = value.decode_as()?;
                for extension in extensions
                    .iter()
                    .filter(|ext| ext.extn_id == oids::SUBJECT_ALT_NAME)
                {
                    let san = SubjectAltName::from_der(extension.extn_value.as_bytes())?;
                    names.extend(san.0);
                }
            }
        }
        Ok(names)
    }

    /// Check the signature over the request info with the request's own key
    ///
    /// Returns `Ok(false)` when the key algorithm does not belong to the
    /// signature algorithm or the signature does not verify.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown algorithms or undecodable keys.
    pub fn verify(&self) -> Result<bool> {
        let algorithm = self.signature_algorithm()?;
        let public_key = &self.inner.info.public_key;
        if public_key.algorithm.oid != algorithm.public_key_oid() {
            log::warn!(
                "Request key algorithm {} does not match signature algorithm {algorithm}",
                public_key.algorithm.oid
            );
            return Ok(false);
        }
        let Some(signature) = self.inner.signature.as_bytes() else {
            return Ok(false);
        };
        let message = self.inner.info.to_der()?;
        Ok(algorithm.verify(public_key.subject_public_key.raw_bytes(), &message, signature)?)
    }

    /// Underlying `x509-cert` structure
    #[must_use]
    pub fn as_cert_req(&self) -> &CertReq {
        &self.inner
    }
}

impl From<CertReq> for CertificationRequest {
    fn from(inner: CertReq) -> Self {
        Self { inner }
    }
}
