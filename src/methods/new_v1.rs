use crate::{UuidConstructionError, UUID};
use std::time::SystemTime;

impl UUID {
    /// Create an RFC 4122 version-1 (time-based) UUID
    /// from a `SystemTime` and a 48-bit node identifier.
    ///
    /// A pseudo-random clock sequence value is used.
    ///
    /// # Errors
    /// - `TimestampBeforeEpoch` is returned if `time` predates 1582-10-15.
    /// - `TimestampOverflow` is returned if `time` exceeds 5236-03-31.
    pub fn new_v1(time: SystemTime, node_id: [u8; 6]) -> Result<Self, UuidConstructionError> {
        // ------------------------------------------------------------------
        // 1. Convert time -> 100 ns ticks since Gregorian epoch
        // ------------------------------------------------------------------
        let ticks = Self::system_time_to_ticks(time)?;

        // ------------------------------------------------------------------
        // 2. Split the 60-bit timestamp into the three wire fields
        // ------------------------------------------------------------------
        let time_low: u32 = (ticks & 0xFFFF_FFFF) as u32;
        let time_mid: u16 = ((ticks >> 32) & 0xFFFF) as u16;
        let time_hi: u16 = ((ticks >> 48) & 0x0FFF) as u16; // only 12 bits

        // ------------------------------------------------------------------
        // 3. Construct UUID
        // ------------------------------------------------------------------

        let clock_seq: u16 = rand::random::<u16>() & 0x3FFF;

        Ok(Self::from_parts_v1(
            time_low, time_mid, time_hi, clock_seq, node_id,
        ))
    }
}
