use crate::{NodeId, NODE_ID_BYTES};

impl From<[u8; NODE_ID_BYTES]> for NodeId {
    fn from(bytes: [u8; NODE_ID_BYTES]) -> Self {
        Self { bytes }
    }
}
