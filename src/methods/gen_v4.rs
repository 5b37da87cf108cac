use rand::fill;

use crate::UUID;

impl UUID {
    /// Generates a random (v4) UUID.
    #[must_use]
    pub fn gen_v4() -> Self {
        let mut uuid = Self::nil();

        fill(&mut uuid.bytes);

        uuid.with_version(4)
    }
}
