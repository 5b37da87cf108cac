use crate::UUID;

/// The RFC 4122 Appendix C well-known namespaces, plus an arbitrary
/// namespace UUID for callers minting their own name-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Fully-qualified domain names.
    Dns,
    /// URLs.
    Url,
    /// ISO OIDs.
    Oid,
    /// X.500 distinguished names (in DER or a text output format).
    X500,
    /// Any other namespace, identified by its own UUID.
    Custom(UUID),
}

const DNS_BYTES: [u8; 16] = [
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];
const URL_BYTES: [u8; 16] = [
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];
const OID_BYTES: [u8; 16] = [
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];
const X500_BYTES: [u8; 16] = [
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];

impl Namespace {
    /// The namespace's own UUID, used as the `namespace` half of the MD5
    /// digest input.
    #[must_use]
    pub fn uuid(&self) -> UUID {
        match self {
            Self::Dns => UUID::from_bytes(DNS_BYTES),
            Self::Url => UUID::from_bytes(URL_BYTES),
            Self::Oid => UUID::from_bytes(OID_BYTES),
            Self::X500 => UUID::from_bytes(X500_BYTES),
            Self::Custom(uuid) => *uuid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_namespaces_match_rfc4122_appendix_c() {
        assert_eq!(
            Namespace::Dns.uuid().to_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Namespace::Url.uuid().to_string(),
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Namespace::Oid.uuid().to_string(),
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Namespace::X500.uuid().to_string(),
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    #[test]
    fn custom_namespace_roundtrips() {
        let uuid = UUID::gen_v4();
        assert_eq!(Namespace::Custom(uuid).uuid(), uuid);
    }
}
