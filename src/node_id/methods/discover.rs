use crate::NodeId;

impl NodeId {
    /// Attempts to discover a real, non-synthetic IEEE 802 address for this
    /// host.
    ///
    /// Without the `mac-address` feature this always reports failure, which
    /// causes [`crate::Generator`] to fall back to a synthesized multicast
    /// node id, matching the original's behavior on a host with no network
    /// interface.
    #[must_use]
    pub fn discover() -> Option<Self> {
        #[cfg(feature = "mac-address")]
        {
            mac_address::get_mac_address()
                .ok()
                .flatten()
                .map(|addr| Self::from_bytes(addr.bytes()))
        }

        #[cfg(not(feature = "mac-address"))]
        {
            None
        }
    }
}
