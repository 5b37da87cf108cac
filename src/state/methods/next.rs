use std::cmp::Ordering;
use std::thread;
use std::time::{Duration, SystemTime};

use crate::{State, UuidError, UUID, UUIDS_PER_TICK};

/// Upper bound on how many times [`State::next`] will resample the clock
/// while waiting for it to advance past an exhausted tick. Chosen generously
/// enough that only a truly stuck or adversarial clock trips it.
const MAX_STALL_RETRIES: u32 = 2000;

impl State {
    /// Produces the next 100 ns tick count and clock sequence for a
    /// version-1 UUID, advancing this generator's state.
    ///
    /// Up to [`UUIDS_PER_TICK`] identifiers may be handed out within the
    /// same sampled tick by distributing them over the following sub-tick
    /// values; once that budget is exhausted, the clock is resampled until
    /// it moves on. The clock sequence is incremented modulo 2^14 on every
    /// call; wall clock stepping backwards (system clock adjusted, NTP
    /// step, and so on) — or the sequence wrapping to zero — forces a
    /// fresh, re-randomized value instead, per RFC 4122 ยง4.2.1.2.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::SystemError`] if the clock fails to advance
    /// within [`MAX_STALL_RETRIES`] resamples, or if the current time
    /// cannot be converted to a tick count at all.
    pub fn next(&mut self) -> Result<(u64, u16), UuidError> {
        for _ in 0..MAX_STALL_RETRIES {
            let ticks = UUID::system_time_to_ticks(SystemTime::now())?;

            match ticks.cmp(&self.last_ticks) {
                Ordering::Greater => {
                    self.advance_clock_seq();
                    self.last_ticks = ticks;
                    self.per_tick = 0;
                    return Ok((ticks, self.seq));
                }
                Ordering::Equal => {
                    if self.per_tick < UUIDS_PER_TICK {
                        self.per_tick += 1;
                        return Ok((ticks + u64::from(self.per_tick), self.seq));
                    }

                    thread::sleep(Duration::from_nanos(100));
                }
                Ordering::Less => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        previous = self.last_ticks,
                        observed = ticks,
                        "system clock stepped backwards; re-randomizing clock sequence"
                    );

                    self.seq = rand::random::<u16>() & 0x3FFF;
                    self.last_ticks = ticks;
                    self.per_tick = 0;
                    return Ok((ticks, self.seq));
                }
            }

            #[cfg(feature = "tracing")]
            tracing::debug!("per-tick budget exhausted, stalling for clock to advance");
        }

        Err(UuidError::SystemError(format!(
            "clock did not advance after {MAX_STALL_RETRIES} retries"
        )))
    }

    /// Advances the clock sequence on the forward (non-backstep) path: a
    /// fresh random value if it is currently zero, otherwise incremented
    /// modulo 2^14, matching the original C generator's `clck++` step.
    fn advance_clock_seq(&mut self) {
        self.seq = if self.seq == 0 {
            rand::random::<u16>() & 0x3FFF
        } else {
            self.seq.wrapping_add(1) & 0x3FFF
        };
    }
}
