//! Object identifiers used inside certification requests

use const_oid::ObjectIdentifier;

/// PKCS#9 `extensionRequest` attribute
pub const EXTENSION_REQUEST: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.14");

/// `id-ce-subjectAltName`
pub const SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");
