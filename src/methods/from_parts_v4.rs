use crate::UUID;

impl UUID {
    /// Constructs a Version 4 (random) UUID from 16 bytes.
    ///
    /// The version and variant fields are set according to RFC 4122.
    #[must_use]
    pub const fn from_parts_v4(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes).with_version(4)
    }
}
