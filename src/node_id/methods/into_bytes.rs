use crate::{NodeId, NODE_ID_BYTES};

impl NodeId {
    /// Returns the inner byte array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; NODE_ID_BYTES] {
        self.bytes
    }
}
