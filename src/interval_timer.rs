use crate::clock::MonotonicClock;
use crate::error::{Result, TimerError};
use log::{debug, trace};

/// Reports, once per crossing, that `interval_ms` has passed since the last
/// time it did (or since construction).
///
/// Each expiry re-anchors on the reading at which it was noticed, so a late
/// poll does not make the next interval shorter.
pub struct IntervalTimer<C: MonotonicClock> {
    interval_ms: u32,
    last_reference_ms: u32,
    clock: C,
}

impl<C: MonotonicClock> IntervalTimer<C> {
    pub fn new(interval_ms: u32, clock: C) -> Self {
        let last_reference_ms = clock.now_ms();
        debug!("New {} ms interval timer anchored at {} ms", interval_ms, last_reference_ms);
        IntervalTimer { interval_ms, last_reference_ms, clock }
    }

    /// Same as `new`, for intervals coming from signed sources such as user
    /// input. Negative intervals are rejected rather than treated as zero.
    pub fn try_new(interval_ms: i64, clock: C) -> Result<Self> {
        if interval_ms < 0 {
            return Err(TimerError::InvalidArgument(interval_ms));
        }
        match u32::try_from(interval_ms) {
            Ok(ms) => Ok(IntervalTimer::new(ms, clock)),
            Err(_) => Err(TimerError::IntervalTooLong(interval_ms)),
        }
    }

    pub fn has_expired(&mut self) -> bool {
        let now = self.clock.now_ms();
        let elapsed = now.wrapping_sub(self.last_reference_ms);

        if elapsed >= self.interval_ms {
            trace!("{} ms interval expired at {} ms ({} ms elapsed)", self.interval_ms, now, elapsed);
            self.last_reference_ms = now;
            return true;
        }

        return false;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms as u64)
    }

    pub fn last_reference_ms(&self) -> u32 {
        self.last_reference_ms
    }

    /// Time since the reference point. Does not re-arm.
    pub fn elapsed_ms(&self) -> u32 {
        self.clock.now_ms().wrapping_sub(self.last_reference_ms)
    }

    /// Time left until the next poll would report expiry; zero once due.
    /// Does not re-arm.
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms.saturating_sub(self.elapsed_ms())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
