use crate::{NodeId, NODE_ID_BYTES};

impl AsMut<[u8; NODE_ID_BYTES]> for NodeId {
    fn as_mut(&mut self) -> &mut [u8; NODE_ID_BYTES] {
        &mut self.bytes
    }
}
