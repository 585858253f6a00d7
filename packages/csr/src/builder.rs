//! Self-signed PKCS#10 request construction

use crate::{CertificationRequest, Result, oids};
use csrgen_pqcrypto::KeyPair;
use der::Encode;
use der::asn1::{Any, BitString, OctetString, SetOfVec};
use x509_cert::attr::Attribute;
use x509_cert::ext::Extension;
use x509_cert::ext::pkix::SubjectAltName;
use x509_cert::ext::pkix::name::GeneralName;
use x509_cert::name::Name;
use x509_cert::request::{CertReq, CertReqInfo, Version};

/// Builds and signs a certification request
///
/// ```no_run
/// # fn demo() -> csrgen_csr::Result<()> {
/// use csrgen_csr::{CsrBuilder, parse_subject, parse_subject_alt_names};
/// use csrgen_pqcrypto::{KeyPair, SignatureAlgorithm};
///
/// let key_pair = KeyPair::generate(SignatureAlgorithm::MlDsa44)?;
/// let csr = CsrBuilder::new(parse_subject("CN=example.com")?)
///     .subject_alt_names(parse_subject_alt_names("example.com,10.0.0.1")?)
///     .sign(&key_pair)?;
/// println!("{}", csr.to_pem()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CsrBuilder {
    subject: Name,
    subject_alt_names: Vec<GeneralName>,
}

impl CsrBuilder {
    /// Start a request for `subject`
    #[must_use]
    pub fn new(subject: Name) -> Self {
        Self {
            subject,
            subject_alt_names: Vec::new(),
        }
    }

    /// Request a `subjectAltName` extension; an empty list requests none
    #[must_use]
    pub fn subject_alt_names(mut self, names: Vec<GeneralName>) -> Self {
        self.subject_alt_names = names;
        self
    }

    /// Assemble the request info and sign its DER with `key_pair`
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the key pair cannot sign.
    pub fn sign(self, key_pair: &KeyPair) -> Result<CertificationRequest> {
        let algorithm = key_pair.algorithm();
        let info = CertReqInfo {
            version: Version::V1,
            subject: self.subject,
            public_key: key_pair.subject_public_key_info()?,
            attributes: extension_request(self.subject_alt_names)?,
        };

        let signature = key_pair.sign(&info.to_der()?)?;
        log::debug!(
            "Signed {algorithm} request ({} byte signature)",
            signature.len()
        );

        Ok(CertificationRequest::from(CertReq {
            info,
            algorithm: algorithm.signature_algorithm_identifier()?,
            signature: BitString::from_bytes(&signature)?,
        }))
    }
}

/// `extensionRequest` attribute holding a non-critical SAN extension
fn extension_request(names: Vec<GeneralName>) -> Result<SetOfVec<Attribute>> {
    if names.is_empty() {
        return Ok(SetOfVec::new());
    }

    let extension = Extension {
        extn_id: oids::SUBJECT_ALT_NAME,
        critical: false,
        extn_value: OctetString::new(SubjectAltName(names).to_der()?)?,
    };
    let attribute = Attribute {
        oid: oids::EXTENSION_REQUEST,
        values: SetOfVec::try_from(vec![Any::encode_from(&vec![extension])?])?,
    };
    Ok(SetOfVec::try_from(vec![attribute])?)
}
