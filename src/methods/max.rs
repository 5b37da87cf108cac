use crate::{UUID, UUID_BYTES};

impl UUID {
    /// The all-ones 128-bit value. Not produced by any generator in this
    /// crate, but useful as an upper bound when an identifier is treated as
    /// a plain 128-bit integer (see the `From`/`TryFrom` integer bridges).
    #[must_use]
    pub const fn max() -> Self {
        Self {
            bytes: [0xFF; UUID_BYTES],
        }
    }
}
