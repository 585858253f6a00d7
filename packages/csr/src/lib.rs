//! PKCS#10 certification requests for post-quantum and classical keys
//!
//! Requests are assembled from an RFC 4514 subject, an optional list of
//! Subject Alternative Names and a [`csrgen_pqcrypto::KeyPair`], then
//! self-signed over the DER `CertificationRequestInfo`.

mod builder;
mod error;
pub mod oids;
pub mod pem;
mod request;
mod san;
mod subject;

pub use self::builder::CsrBuilder;
pub use self::error::{CsrError, Result};
pub use self::request::CertificationRequest;
pub use self::san::{parse_general_name, parse_subject_alt_names};
pub use self::subject::{DEFAULT_SUBJECT, parse_subject};

pub use x509_cert::ext::pkix::name::GeneralName;
pub use x509_cert::name::Name;
