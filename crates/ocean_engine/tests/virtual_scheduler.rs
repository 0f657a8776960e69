use std::time::Duration;

use chrono::{TimeDelta, TimeZone, Utc};
use ocean_core::TimerKey;
use ocean_engine::{Scheduler, VirtualScheduler};
use pretty_assertions::assert_eq;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn drain(scheduler: &mut VirtualScheduler) -> Vec<TimerKey> {
    std::iter::from_fn(|| scheduler.poll_due()).collect()
}

fn scheduler() -> VirtualScheduler {
    VirtualScheduler::new(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
}

const REPLY: TimerKey = TimerKey::AssistantReply { turn: 1 };
const START: TimerKey = TimerKey::JobStart { job_id: 1 };
const TICK: TimerKey = TimerKey::JobTick { job_id: 1 };

#[test]
fn nothing_fires_before_its_deadline() {
    let mut s = scheduler();
    s.schedule_once(REPLY, ms(1500));

    s.advance_to(ms(1499));
    assert!(drain(&mut s).is_empty());
    s.advance_to(ms(1500));
    assert_eq!(drain(&mut s), vec![REPLY]);
    assert_eq!(s.pending(), 0);
}

#[test]
fn equal_deadlines_fire_in_schedule_order() {
    let mut s = scheduler();
    s.schedule_once(START, ms(100));
    s.schedule_once(REPLY, ms(100));
    s.schedule_once(TimerKey::JobStart { job_id: 2 }, ms(50));

    s.advance_to(ms(100));
    assert_eq!(
        drain(&mut s),
        vec![TimerKey::JobStart { job_id: 2 }, START, REPLY]
    );
}

#[test]
fn repeating_timer_keeps_cadence_until_cancelled() {
    let mut s = scheduler();
    s.schedule_every(TICK, ms(500));

    // Jumping 1.2s at once yields the two missed ticks.
    s.advance_to(ms(1200));
    assert_eq!(drain(&mut s), vec![TICK, TICK]);
    assert_eq!(s.next_deadline(), Some(ms(1500)));

    assert!(s.cancel(&TICK));
    assert!(!s.cancel(&TICK));
    s.advance_to(ms(5000));
    assert!(drain(&mut s).is_empty());
}

#[test]
fn rescheduling_a_key_replaces_it() {
    let mut s = scheduler();
    s.schedule_once(REPLY, ms(100));
    s.schedule_once(REPLY, ms(300));
    assert_eq!(s.pending(), 1);

    s.advance_to(ms(200));
    assert!(drain(&mut s).is_empty());
    s.advance_to(ms(300));
    assert_eq!(drain(&mut s), vec![REPLY]);
}

#[test]
fn cancel_all_clears_everything() {
    let mut s = scheduler();
    s.schedule_once(REPLY, ms(10));
    s.schedule_every(TICK, ms(10));
    assert_eq!(s.cancel_all(), 2);
    assert_eq!(s.pending(), 0);
    assert_eq!(s.next_deadline(), None);
}

#[test]
fn now_tracks_virtual_time() {
    let mut s = scheduler();
    let epoch = s.now();
    s.advance_to(ms(2500));
    assert_eq!(s.now(), epoch + TimeDelta::milliseconds(2500));

    // The clock never moves backwards.
    s.advance_to(ms(1000));
    assert_eq!(s.elapsed(), ms(2500));
    assert_eq!(ocean_logging::sim_millis(), 2500);
}
