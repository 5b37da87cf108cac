use crate::UUID;

// ────────────────────────────────────────────────────────────────────────────
// v3 constructor from a pre-computed MD5 digest
// ────────────────────────────────────────────────────────────────────────────

impl UUID {
    /// Builds an RFC-4122 Version-3 UUID from a raw 16-byte MD5 digest.
    ///
    /// The caller must supply the digest that results from hashing
    /// `namespace.bytes || name`.  The function overwrites the version and
    /// variant fields via `.with_version(3)` and returns the finished UUID.
    #[must_use]
    pub const fn from_parts_v3(digest: [u8; 16]) -> Self {
        Self { bytes: digest }.with_version(3)
    }
}
