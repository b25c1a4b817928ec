//! A polled interval timer for control loops running off a millisecond counter.
//!
//! ```
//! use looptimer::{IntervalTimer, ManualClock};
//!
//! let clock = ManualClock::new(1000);
//! let mut timer = IntervalTimer::new(100, clock.clone());
//!
//! clock.set(1050);
//! assert!(!timer.has_expired());
//! clock.set(1100);
//! assert!(timer.has_expired());
//! ```

pub mod clock;
pub mod error;
pub mod interval_timer;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use error::TimerError;
pub use interval_timer::IntervalTimer;
