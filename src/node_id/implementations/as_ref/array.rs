use crate::{NodeId, NODE_ID_BYTES};

impl AsRef<[u8; NODE_ID_BYTES]> for NodeId {
    fn as_ref(&self) -> &[u8; NODE_ID_BYTES] {
        &self.bytes
    }
}
