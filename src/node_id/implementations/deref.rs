use std::ops::Deref;

use crate::{NodeId, NODE_ID_BYTES};

impl Deref for NodeId {
    type Target = [u8; NODE_ID_BYTES];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}
