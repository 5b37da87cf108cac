use crate::{Variant, UUID};

impl UUID {
    #[must_use]
    pub const fn with_variant(self, variant: Variant) -> Self {
        let mut uuid = self;

        uuid.bytes[8] &= variant.bitmask();
        uuid.bytes[8] |= variant.prefix();

        uuid
    }
}
