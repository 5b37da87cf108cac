use crate::{UUID, UUID_BYTES};

impl UUID {
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            bytes: [0; UUID_BYTES],
        }
    }
}
