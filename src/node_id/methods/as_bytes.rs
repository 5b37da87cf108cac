use crate::{NodeId, NODE_ID_BYTES};

impl NodeId {
    /// Returns a reference to the inner byte array.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_BYTES] {
        &self.bytes
    }
}
