use std::thread;
use std::time::{Duration, Instant};

use ocean_core::TimerKey;
use ocean_engine::{RealTimeScheduler, Scheduler};

const REPLY: TimerKey = TimerKey::AssistantReply { turn: 1 };
const TICK: TimerKey = TimerKey::JobTick { job_id: 1 };

fn wait_for(scheduler: &mut RealTimeScheduler, timeout: Duration) -> Option<TimerKey> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(key) = scheduler.poll_due() {
            return Some(key);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

#[test]
fn one_shot_fires_once() {
    let mut scheduler = RealTimeScheduler::new().unwrap();
    scheduler.schedule_once(REPLY, Duration::from_millis(10));

    assert_eq!(wait_for(&mut scheduler, Duration::from_secs(5)), Some(REPLY));
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(wait_for(&mut scheduler, Duration::from_millis(100)), None);
}

#[test]
fn repeating_timer_fires_until_cancelled() {
    let mut scheduler = RealTimeScheduler::new().unwrap();
    scheduler.schedule_every(TICK, Duration::from_millis(10));

    for _ in 0..3 {
        assert_eq!(wait_for(&mut scheduler, Duration::from_secs(5)), Some(TICK));
    }
    assert!(scheduler.cancel(&TICK));
    assert_eq!(wait_for(&mut scheduler, Duration::from_millis(100)), None);
}

#[test]
fn cancelled_firing_is_discarded() {
    let mut scheduler = RealTimeScheduler::new().unwrap();
    scheduler.schedule_once(REPLY, Duration::from_millis(1));
    // Let the task deliver into the channel before cancelling.
    thread::sleep(Duration::from_millis(100));

    assert!(scheduler.cancel(&REPLY));
    assert_eq!(scheduler.poll_due(), None);
}
