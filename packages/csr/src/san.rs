//! Subject Alternative Name parsing
//!
//! Each entry is classified by its shape: IP literals first, then URIs,
//! then email addresses, with everything else treated as a DNS name.

use crate::{CsrError, Result};
use der::asn1::{Ia5String, OctetString};
use std::net::IpAddr;
use x509_cert::ext::pkix::name::GeneralName;

/// Parse a comma-separated SAN list, trimming entries and skipping blanks
///
/// # Errors
///
/// Returns the first entry that cannot be encoded.
pub fn parse_subject_alt_names(list: &str) -> Result<Vec<GeneralName>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_general_name)
        .collect()
}

/// Classify and encode a single SAN entry
///
/// # Errors
///
/// Returns [`CsrError::InvalidSubjectAltName`] for malformed IP literals and
/// for non-ASCII names.
pub fn parse_general_name(entry: &str) -> Result<GeneralName> {
    let entry = entry.trim();
    if looks_like_ip(entry) {
        let addr: IpAddr = entry
            .parse()
            .map_err(|e| CsrError::invalid_san(entry, e))?;
        let octets = match addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        };
        return Ok(GeneralName::IpAddress(OctetString::new(octets)?));
    }

    let text = Ia5String::new(entry).map_err(|e| CsrError::invalid_san(entry, e))?;
    if entry.contains("://") {
        Ok(GeneralName::UniformResourceIdentifier(text))
    } else if entry.contains('@') && !entry.contains('/') {
        Ok(GeneralName::Rfc822Name(text))
    } else {
        Ok(GeneralName::DnsName(text))
    }
}

fn looks_like_ip(entry: &str) -> bool {
    !entry.is_empty()
        && entry
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '.' || c == ':')
        && (entry.contains('.') || entry.contains(':'))
}
