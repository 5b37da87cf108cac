use crate::UUID;

impl UUID {
    /// Rebuilds an identifier from its 16-octet wire form.
    ///
    /// The exact inverse of [`UUID::pack`]; safe to call with a buffer that
    /// aliases one this same identifier previously packed into, since the
    /// bytes are simply copied into the new value.
    #[must_use]
    pub const fn unpack(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}
