use std::ops::DerefMut;

use crate::NodeId;

impl DerefMut for NodeId {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes
    }
}
