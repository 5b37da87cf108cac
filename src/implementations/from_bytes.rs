use crate::{UUID, UUID_BYTES};

impl From<[u8; UUID_BYTES]> for UUID {
    fn from(bytes: [u8; UUID_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<UUID> for [u8; UUID_BYTES] {
    fn from(uuid: UUID) -> Self {
        *uuid.as_bytes()
    }
}
