use std::time::SystemTime;

use crate::{Gregorian, UuidConstructionError, UUID};

impl UUID {
    /// Converts a `SystemTime` into an RFC 4122 timestamp (ticks).
    ///
    /// # Arguments
    ///
    /// * `time` - The `SystemTime` to convert.
    ///
    /// # Returns
    ///
    /// The number of 100-nanosecond intervals between the Gregorian epoch
    /// (1582-10-15) and the provided `time`.
    ///
    /// # Errors
    ///
    /// - [`UuidConstructionError::TimestampBeforeEpoch`] if `time` is before
    ///   the Gregorian epoch.
    /// - [`UuidConstructionError::TimestampOverflow`] if `time` is so far in
    ///   the future that the tick count exceeds \( 2^{60} - 1 \).
    pub fn system_time_to_ticks(time: SystemTime) -> Result<u64, UuidConstructionError> {
        // Calculate the duration since the Gregorian epoch.
        // The `let-else` block provides a concise way to handle the error case.
        let Ok(duration_since_epoch) = time.duration_since(Gregorian::epoch()) else {
            return Err(UuidConstructionError::TimestampBeforeEpoch);
        };

        // Convert the duration to ticks. The `?` operator will handle a
        // potential `DurationToTicksError` and convert it into a
        // `UuidConstructionError` via the `From` trait implementation.
        let ticks = Self::duration_to_ticks(duration_since_epoch)?;

        Ok(ticks)
    }
}
