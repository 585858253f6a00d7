//! Subject distinguished names

use crate::{CsrError, Result};
use std::str::FromStr;
use x509_cert::name::Name;

/// Subject used when none is configured
pub const DEFAULT_SUBJECT: &str = "CN=Test Certificate,O=Example Org,C=US";

/// Parse a distinguished name such as `CN=host,O=Org,C=US`
///
/// RDNs are encoded in the order they are written, so the example above puts
/// `CN` first in the DER `RDNSequence`. `Name`'s `Display` follows RFC 4514 and
/// prints them reversed.
///
/// # Errors
///
/// Returns [`CsrError::InvalidSubject`] if the string is not a valid DN.
pub fn parse_subject(dn: &str) -> Result<Name> {
    let mut name = Name::from_str(dn.trim()).map_err(|e| CsrError::invalid_subject(dn, e))?;
    // from_str stores the RDNs last-to-first
    name.0.reverse();
    Ok(name)
}
