use crate::UUID;

impl UUID {
    /// Serializes this identifier into its 16-octet wire form.
    ///
    /// Named to match the facade contract in the language-neutral
    /// interface (`pack`/`unpack`); the bytes are laid out exactly as
    /// [`UUID::as_bytes`] already returns them, big-endian for every
    /// multi-byte field. Ownership of the returned buffer transfers to the
    /// caller, matching the C original's `uuid_pack` except that there is
    /// no allocation to fail: the buffer is returned by value.
    #[must_use]
    pub const fn pack(&self) -> [u8; 16] {
        self.bytes
    }
}
