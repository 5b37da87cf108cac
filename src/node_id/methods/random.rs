use rand::fill;

use crate::NodeId;

impl NodeId {
    /// Generates a random synthetic [`NodeId`] with the multicast and
    /// locally-administered bits set, so it can never collide with a real,
    /// IEEE-assigned address.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 6];

        fill(&mut bytes);

        bytes[0] |= 0x03;

        Self { bytes }
    }
}
