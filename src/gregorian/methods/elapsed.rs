use std::time::{Duration, SystemTime, SystemTimeError};

use crate::Gregorian;

impl Gregorian {
    /// Calculates how much time has elapsed since the [`Gregorian`] epoch
    ///
    /// # Errors
    ///
    /// [`SystemTimeError`] is returned if the current system time is before the [`Gregorian`] epoch.
    pub fn elapsed() -> Result<Duration, SystemTimeError> {
        SystemTime::now().duration_since(Self::epoch())
    }
}
