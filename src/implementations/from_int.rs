use std::num::TryFromIntError;

use crate::UUID;

// ---------------------------------------------------------------------------
// Into UUID: every integer widens to u128/i128, then big-endian encodes.
// ---------------------------------------------------------------------------

impl From<u128> for UUID {
    fn from(v: u128) -> Self {
        Self {
            bytes: v.to_be_bytes(),
        }
    }
}

impl From<i128> for UUID {
    fn from(v: i128) -> Self {
        Self::from(v as u128)
    }
}

macro_rules! impl_from_small_unsigned {
    ($($t:ty),*) => { $(
        impl From<$t> for UUID {
            fn from(v: $t) -> Self {
                Self::from(u128::from(v))
            }
        }
    )* };
}

macro_rules! impl_from_small_signed {
    ($($t:ty),*) => { $(
        impl From<$t> for UUID {
            fn from(v: $t) -> Self {
                Self::from(i128::from(v))
            }
        }
    )* };
}

impl_from_small_unsigned!(u8, u16, u32, u64);
impl_from_small_signed!(i8, i16, i32, i64);

impl From<usize> for UUID {
    fn from(v: usize) -> Self {
        Self::from(v as u128)
    }
}

impl From<isize> for UUID {
    fn from(v: isize) -> Self {
        Self::from(v as i128)
    }
}

// ---------------------------------------------------------------------------
// From UUID: only 128-bit integers get infallible From.
// ---------------------------------------------------------------------------

impl From<UUID> for u128 {
    fn from(uuid: UUID) -> Self {
        Self::from_be_bytes(uuid.bytes)
    }
}

impl From<UUID> for i128 {
    fn from(uuid: UUID) -> Self {
        u128::from(uuid) as Self
    }
}

// ---------------------------------------------------------------------------
// From UUID: smaller integers get TryFrom, delegating to TryFrom<u128>.
// ---------------------------------------------------------------------------

macro_rules! impl_try_from_uuid_unsigned {
    ($($t:ty),*) => { $(
        impl TryFrom<UUID> for $t {
            type Error = TryFromIntError;

            fn try_from(uuid: UUID) -> Result<Self, Self::Error> {
                <$t>::try_from(u128::from(uuid))
            }
        }
    )* };
}

macro_rules! impl_try_from_uuid_signed {
    ($($t:ty),*) => { $(
        impl TryFrom<UUID> for $t {
            type Error = TryFromIntError;

            fn try_from(uuid: UUID) -> Result<Self, Self::Error> {
                <$t>::try_from(i128::from(uuid))
            }
        }
    )* };
}

impl_try_from_uuid_unsigned!(u8, u16, u32, u64, usize);
impl_try_from_uuid_signed!(i8, i16, i32, i64, isize);
