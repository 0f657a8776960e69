use std::time::Duration;

use chrono::{DateTime, Utc};
use ocean_core::TimerKey;

/// Deferred-callback backend used by the [`Simulator`](crate::Simulator).
///
/// Timers are identified by [`TimerKey`]; scheduling a key that is already
/// armed replaces the earlier timer. Fired keys are collected by polling, so
/// every callback runs on the thread that owns the scheduler.
pub trait Scheduler {
    fn schedule_once(&mut self, key: TimerKey, delay: Duration);
    fn schedule_every(&mut self, key: TimerKey, period: Duration);
    /// Returns whether `key` was armed.
    fn cancel(&mut self, key: &TimerKey) -> bool;
    /// Disarms everything; returns how many timers were dropped.
    fn cancel_all(&mut self) -> usize;
    /// Next fired key, if any. Repeating timers stay armed.
    fn poll_due(&mut self) -> Option<TimerKey>;
    fn pending(&self) -> usize;
    fn now(&self) -> DateTime<Utc>;
}
