use thiserror::Error;

#[derive(Error, Debug)]
#[derive(PartialEq, Eq)]
#[derive(Copy, Clone)]
pub enum TimerError {
    #[error("Interval must not be negative, got {0} ms")]
    InvalidArgument(i64),
    #[error("Interval of {0} ms does not fit a 32-bit millisecond counter")]
    IntervalTooLong(i64),
}

pub type Result<T> = std::result::Result<T, TimerError>;
