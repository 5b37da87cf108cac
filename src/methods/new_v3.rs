use crate::{Md5, UUID};

impl UUID {
    /// Builds an RFC-4122 Version-3 UUID from `namespace || name`.
    ///
    /// The function
    ///   1. hashes the concatenation `namespace.bytes || name` with MD5,
    ///   2. calls `from_parts_v3` to set version = 3 + RFC-4122 variant,
    ///   3. returns the finished UUID.
    #[must_use]
    pub fn new_v3<N>(namespace: &Self, name: N) -> Self
    where
        N: AsRef<[u8]>,
    {
        let mut hasher = Md5::new();

        hasher.update(namespace.as_bytes());
        hasher.update(name.as_ref());

        let digest = hasher.finalize();

        Self::from_parts_v3(digest)
    }
}
