use crate::{NodeId, NODE_ID_BYTES};

impl NodeId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; NODE_ID_BYTES]) -> Self {
        Self { bytes }
    }
}
