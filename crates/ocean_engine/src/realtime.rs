use std::collections::HashMap;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use ocean_core::TimerKey;
use ocean_logging::{ocean_debug, ocean_trace};
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] io::Error),
}

struct Armed {
    generation: u64,
    repeating: bool,
    task: JoinHandle<()>,
}

/// Wall-clock scheduler backed by a tokio runtime.
///
/// Each timer is a spawned task that reports its key over a channel; keys are
/// collected with [`Scheduler::poll_due`](crate::Scheduler::poll_due) on the
/// owner's thread. Cancelling aborts the task, and firings that were already
/// in the channel when their timer was cancelled or replaced are discarded.
/// Dropping the scheduler aborts every pending timer.
pub struct RealTimeScheduler {
    runtime: Runtime,
    fired_tx: mpsc::Sender<(TimerKey, u64)>,
    fired_rx: mpsc::Receiver<(TimerKey, u64)>,
    armed: HashMap<TimerKey, Armed>,
    generation: u64,
}

impl RealTimeScheduler {
    pub fn new() -> Result<Self, SchedulerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("oceandash-timers")
            .enable_time()
            .build()?;
        let (fired_tx, fired_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            fired_tx,
            fired_rx,
            armed: HashMap::new(),
            generation: 0,
        })
    }

    fn track(&mut self, key: TimerKey, generation: u64, repeating: bool, task: JoinHandle<()>) {
        let armed = Armed {
            generation,
            repeating,
            task,
        };
        if let Some(previous) = self.armed.insert(key, armed) {
            previous.task.abort();
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

impl crate::Scheduler for RealTimeScheduler {
    fn schedule_once(&mut self, key: TimerKey, delay: Duration) {
        let generation = self.next_generation();
        let tx = self.fired_tx.clone();
        let task = self.runtime.spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send((key, generation));
        });
        ocean_trace!("spawned {:?} once in {:?}", key, delay);
        self.track(key, generation, false, task);
    }

    fn schedule_every(&mut self, key: TimerKey, period: Duration) {
        let period = period.max(MIN_PERIOD);
        let generation = self.next_generation();
        let tx = self.fired_tx.clone();
        let task = self.runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send((key, generation)).is_err() {
                    break;
                }
            }
        });
        ocean_trace!("spawned {:?} every {:?}", key, period);
        self.track(key, generation, true, task);
    }

    fn cancel(&mut self, key: &TimerKey) -> bool {
        match self.armed.remove(key) {
            Some(armed) => {
                armed.task.abort();
                true
            }
            None => false,
        }
    }

    fn cancel_all(&mut self) -> usize {
        let dropped = self.armed.len();
        for (_, armed) in self.armed.drain() {
            armed.task.abort();
        }
        dropped
    }

    fn poll_due(&mut self) -> Option<TimerKey> {
        while let Ok((key, generation)) = self.fired_rx.try_recv() {
            let Some(armed) = self.armed.get(&key) else {
                ocean_debug!("dropping firing of cancelled timer {:?}", key);
                continue;
            };
            if armed.generation != generation {
                ocean_debug!("dropping firing of replaced timer {:?}", key);
                continue;
            }
            if !armed.repeating {
                self.armed.remove(&key);
            }
            return Some(key);
        }
        None
    }

    fn pending(&self) -> usize {
        self.armed.len()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl Drop for RealTimeScheduler {
    fn drop(&mut self) {
        crate::Scheduler::cancel_all(self);
    }
}
