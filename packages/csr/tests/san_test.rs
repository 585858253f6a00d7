//! Tests for subject and Subject Alternative Name parsing

use const_oid::ObjectIdentifier;
use csrgen_csr::{
    CsrError, GeneralName, Name, parse_general_name, parse_subject, parse_subject_alt_names,
};

const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
const ORGANIZATION: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
const COUNTRY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");

fn rdn_oids(name: &Name) -> Vec<ObjectIdentifier> {
    name.0
        .iter()
        .map(|rdn| rdn.0.iter().next().expect("non-empty RDN").oid)
        .collect()
}

#[test]
fn classifies_ipv4_and_ipv6_literals() {
    match parse_general_name("192.168.1.10").expect("ipv4") {
        GeneralName::IpAddress(octets) => assert_eq!(octets.as_bytes(), &[192, 168, 1, 10]),
        other => panic!("expected IP address, got {other:?}"),
    }
    match parse_general_name("2001:db8::1").expect("ipv6") {
        GeneralName::IpAddress(octets) => assert_eq!(octets.as_bytes().len(), 16),
        other => panic!("expected IP address, got {other:?}"),
    }
}

#[test]
fn rejects_ip_shaped_garbage() {
    let err = parse_general_name("999.1.1.1").expect_err("invalid IPv4 literal");
    assert!(matches!(err, CsrError::InvalidSubjectAltName { .. }));
    assert!(err.is_input_error());
}

#[test]
fn classifies_uri_email_and_dns() {
    assert!(matches!(
        parse_general_name("https://example.com/ca").expect("uri"),
        GeneralName::UniformResourceIdentifier(_)
    ));
    assert!(matches!(
        parse_general_name("admin@example.com").expect("email"),
        GeneralName::Rfc822Name(_)
    ));
    assert!(matches!(
        parse_general_name("user@host/path").expect("dns fallback"),
        GeneralName::DnsName(_)
    ));
    assert!(matches!(
        parse_general_name("www.example.com").expect("dns"),
        GeneralName::DnsName(_)
    ));
}

#[test]
fn rejects_non_ascii_names() {
    let err = parse_general_name("bücher.example").expect_err("IA5String is ASCII only");
    assert!(matches!(err, CsrError::InvalidSubjectAltName { .. }));
}

#[test]
fn list_is_trimmed_and_blank_entries_skipped() {
    let names = parse_subject_alt_names(" example.com , ,10.0.0.1,, admin@example.com ")
        .expect("san list");
    assert_eq!(names.len(), 3);
    assert!(matches!(names[0], GeneralName::DnsName(_)));
    assert!(matches!(names[1], GeneralName::IpAddress(_)));
    assert!(matches!(names[2], GeneralName::Rfc822Name(_)));

    assert!(parse_subject_alt_names("").expect("empty").is_empty());
    assert!(parse_subject_alt_names(" , ").expect("blank").is_empty());
}

#[test]
fn parses_default_style_subject() {
    let name = parse_subject("CN=Test Certificate,O=Example Org,C=US").expect("subject");
    let rendered = name.to_string();
    assert!(rendered.contains("CN=Test Certificate"));
    assert!(rendered.contains("O=Example Org"));
}

#[test]
fn subject_rdns_keep_written_order() {
    let name = parse_subject("CN=Test Certificate,O=Example Org,C=US").expect("subject");
    assert_eq!(rdn_oids(&name), [COMMON_NAME, ORGANIZATION, COUNTRY]);

    let reordered = parse_subject("C=US,CN=host").expect("subject");
    assert_eq!(rdn_oids(&reordered), [COUNTRY, COMMON_NAME]);
}

#[test]
fn rejects_malformed_subject() {
    let err = parse_subject("not a distinguished name").expect_err("malformed DN");
    assert!(matches!(err, CsrError::InvalidSubject { .. }));
}
