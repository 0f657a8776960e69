use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use ocean_core::TimerKey;
use ocean_logging::ocean_trace;

use crate::Scheduler;

/// Smallest repeat period; a zero period would never let time move on.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Position in the queue: deadline, then scheduling order.
type Slot = (Duration, u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    slot: Slot,
    period: Option<Duration>,
}

/// Deterministic scheduler driven by explicit time advancement.
///
/// Nothing fires on its own: the owner moves the clock with
/// [`advance_to`](Self::advance_to) and then drains due keys with
/// [`Scheduler::poll_due`]. Timers with equal deadlines fire in the order they
/// were scheduled.
#[derive(Debug, Clone)]
pub struct VirtualScheduler {
    epoch: DateTime<Utc>,
    elapsed: Duration,
    seq: u64,
    queue: BTreeMap<Slot, TimerKey>,
    armed: HashMap<TimerKey, Armed>,
}

impl VirtualScheduler {
    /// Starts the clock at `epoch` with nothing armed.
    pub fn new(epoch: DateTime<Utc>) -> Self {
        ocean_logging::set_sim_millis(0);
        Self {
            epoch,
            elapsed: Duration::ZERO,
            seq: 0,
            queue: BTreeMap::new(),
            armed: HashMap::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn is_armed(&self, key: &TimerKey) -> bool {
        self.armed.contains_key(key)
    }

    /// Moves the clock forward to `elapsed`. Moving backwards is ignored.
    pub fn advance_to(&mut self, elapsed: Duration) {
        if elapsed > self.elapsed {
            self.elapsed = elapsed;
            ocean_logging::set_sim_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        }
    }

    fn arm(&mut self, key: TimerKey, deadline: Duration, period: Option<Duration>) {
        self.seq += 1;
        let slot = (deadline, self.seq);
        self.queue.insert(slot, key);
        self.armed.insert(key, Armed { slot, period });
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&mut self, key: TimerKey, delay: Duration) {
        self.cancel(&key);
        ocean_trace!("arm {:?} once in {:?}", key, delay);
        self.arm(key, self.elapsed + delay, None);
    }

    fn schedule_every(&mut self, key: TimerKey, period: Duration) {
        self.cancel(&key);
        let period = period.max(MIN_PERIOD);
        ocean_trace!("arm {:?} every {:?}", key, period);
        self.arm(key, self.elapsed + period, Some(period));
    }

    fn cancel(&mut self, key: &TimerKey) -> bool {
        match self.armed.remove(key) {
            Some(armed) => {
                self.queue.remove(&armed.slot);
                true
            }
            None => false,
        }
    }

    fn cancel_all(&mut self) -> usize {
        let dropped = self.armed.len();
        self.armed.clear();
        self.queue.clear();
        dropped
    }

    fn poll_due(&mut self) -> Option<TimerKey> {
        let (&slot, &key) = self.queue.first_key_value()?;
        if slot.0 > self.elapsed {
            return None;
        }
        self.queue.remove(&slot);

        match self.armed.get(&key).and_then(|armed| armed.period) {
            // Re-arm from the missed deadline so the cadence does not drift.
            Some(period) => self.arm(key, slot.0 + period, Some(period)),
            None => {
                self.armed.remove(&key);
            }
        }
        Some(key)
    }

    fn pending(&self) -> usize {
        self.armed.len()
    }

    fn now(&self) -> DateTime<Utc> {
        TimeDelta::from_std(self.elapsed)
            .ok()
            .and_then(|delta| self.epoch.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
