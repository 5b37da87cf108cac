use rand::RngCore;

use crate::UUID;

impl UUID {
    /// Generates a random (v4) UUID using the provided random number generator.
    #[must_use]
    pub fn new_v4<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut uuid = Self::nil();

        rng.fill_bytes(&mut uuid.bytes);

        uuid.with_version(4)
    }
}
