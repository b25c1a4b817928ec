//! Millisecond clock sources a timer can poll.
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds since some fixed epoch (usually boot).
///
/// Readings never decrease, except that they wrap around at `u32::MAX`
/// (roughly every 49.7 days).
pub trait MonotonicClock {
    fn now_ms(&self) -> u32;
}

// Lets a platform `millis()` function be passed straight in.
impl<F> MonotonicClock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Host clock backed by `Instant`. The epoch is the moment it was created.
#[derive(Debug)]
#[derive(Copy, Clone)]
pub struct SystemClock {
    origin: Instant,
    offset_ms: u32,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock::starting_at(0)
    }

    /// The first reading will be `offset_ms`. Handy for running into the
    /// wraparound without waiting for it.
    pub fn starting_at(offset_ms: u32) -> Self {
        SystemClock { origin: Instant::now(), offset_ms }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncating to 32 bits is the wraparound.
        let since_origin = self.origin.elapsed().as_millis() as u32;
        since_origin.wrapping_add(self.offset_ms)
    }
}

/// A clock that only moves when told to. Clones share the same reading, so a
/// test can keep one handle and give another to the timer.
#[derive(Debug, Default)]
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new(start_ms: u32) -> Self {
        ManualClock { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, by_ms: u32) {
        self.now.set(self.now.get().wrapping_add(by_ms));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn manual_clock_clones_share_reading() {
        let clock = ManualClock::new(10);
        let handle = clock.clone();

        handle.advance(5);
        assert_eq!(clock.now_ms(), 15);

        clock.set(1000);
        assert_eq!(handle.now_ms(), 1000);
    }

    #[test]
    fn manual_clock_advance_wraps() {
        let clock = ManualClock::new(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now_ms(), 1);
    }

    #[test]
    fn closure_is_a_clock() {
        let reading = Cell::new(42u32);
        let millis = || reading.get();

        assert_eq!(millis.now_ms(), 42);
        reading.set(43);
        assert_eq!(millis.now_ms(), 43);
    }

    #[test]
    fn system_clock_never_goes_backwards() {
        let clock = SystemClock::new();
        let mut last = clock.now_ms();
        for _ in 0..1000 {
            let now = clock.now_ms();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn system_clock_tracks_sleep() {
        let clock = SystemClock::new();
        let start = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(50));
        let elapsed = clock.now_ms().wrapping_sub(start);

        assert!(elapsed >= 50);
        // Generous upper bound, CI machines stall.
        assert_approx_eq!(elapsed as f64, 50., 1000.);
    }

    #[test]
    fn system_clock_offset_wraps() {
        let clock = SystemClock::starting_at(u32::MAX);
        std::thread::sleep(std::time::Duration::from_millis(5));

        // Wrapped past zero, so the reading is small again.
        assert!(clock.now_ms() < 1000);
    }
}
