use std::time::Duration;

use crate::{DurationToTicksError, UUID};

impl UUID {
    /// Generates an RFC 4122 timestamp from a `Duration`.
    ///
    /// The timestamp represents the number of 100-nanosecond intervals since
    /// the Gregorian epoch (1582-10-15 00:00:00 UTC).
    ///
    /// # Returns
    ///
    /// The number of full 100-ns segments is returned as a `u64`.
    ///
    /// # Errors
    ///
    /// - [`DurationToTicksError::TimestampOverflow`] is returned if the
    ///   duration corresponds to a value of \( 2^{60} \) or greater, which
    ///   would overflow the 60 bits available for the timestamp. This occurs
    ///   for dates beyond 5236-03-31.
    pub const fn duration_to_ticks(duration: Duration) -> Result<u64, DurationToTicksError> {
        // `duration.as_nanos()` returns a `u128`, preventing overflow for
        // large durations during this intermediate calculation.
        let ticks = duration.as_nanos() / 100;

        // The UUID timestamp is 60 bits. We must check if the calculated
        // ticks can fit. `1u128 << 60` is the first value that is too large.
        if ticks >= (1u128 << 60) {
            return Err(DurationToTicksError::TimestampOverflow);
        }

        // The value is confirmed to be < 2^60, so it can be safely cast to u64.
        #[allow(clippy::cast_possible_truncation)]
        Ok(ticks as u64)
    }
}
