use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use ocean_core::{
    update, AppState, Effect, JobId, JobStatus, Msg, Notification, SimSettings, TimerKey,
    DEFAULT_SIZE_LABEL,
};
use pretty_assertions::assert_eq;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 14, 23, 45).unwrap()
}

fn submit_path(state: AppState, path: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::JobPathChanged(path.to_string()));
    update(state, Msg::JobSubmitted)
}

fn started(path: &str) -> (AppState, JobId) {
    let (state, _) = submit_path(AppState::new(), path);
    let job_id = state.jobs().jobs()[0].id;
    let (state, _) = update(state, Msg::JobStartDue { job_id, at: t0() });
    (state, job_id)
}

#[test]
fn submit_creates_pending_job_first() {
    let (mut state, effects) = submit_path(AppState::new(), "/data/ocean/ARGO_2024_temperature.nc");

    let view = state.view();
    assert_eq!(view.jobs.len(), 1);
    let row = &view.jobs[0];
    assert_eq!(row.filename, "ARGO_2024_temperature.nc");
    assert_eq!(row.status, JobStatus::Pending);
    assert_eq!(row.progress, 0);
    assert_eq!(row.size, DEFAULT_SIZE_LABEL);
    assert!(view.path_input.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleOnce {
            key: TimerKey::JobStart { job_id: row.job_id },
            delay: SimSettings::default().job_start_delay,
        }]
    );

    let (state, _) = submit_path(state, "second.nc");
    let names: Vec<_> = state.view().jobs.iter().map(|j| j.filename.clone()).collect();
    assert_eq!(names, vec!["second.nc", "ARGO_2024_temperature.nc"]);
}

#[test]
fn blank_path_notifies_and_leaves_state() {
    let (mut state, _) = update(AppState::new(), Msg::JobPathChanged("   ".to_string()));
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::JobSubmitted);
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::error(
            "Error",
            "Please specify a file path"
        ))]
    );
}

#[test]
fn start_moves_pending_to_processing_and_arms_ticks() {
    let (state, _) = submit_path(AppState::new(), "a.nc");
    let job_id = state.jobs().jobs()[0].id;

    let (state, effects) = update(state, Msg::JobStartDue { job_id, at: t0() });
    let job = state.jobs().get(job_id).unwrap();
    assert_eq!(job.status, JobStatus::Processing);
    assert_eq!(job.start_time, Some(t0()));
    assert_eq!(
        effects,
        vec![Effect::ScheduleEvery {
            key: TimerKey::JobTick { job_id },
            period: SimSettings::default().tick_period,
        }]
    );

    // A second start for the same job is ignored.
    let (state, effects) = update(state, Msg::JobStartDue { job_id, at: t0() });
    assert!(effects.is_empty());
    assert_eq!(state.jobs().get(job_id).unwrap().start_time, Some(t0()));
}

#[test]
fn ticks_before_start_are_ignored() {
    let (state, _) = submit_path(AppState::new(), "a.nc");
    let job_id = state.jobs().jobs()[0].id;

    let (state, effects) = update(
        state,
        Msg::JobTick {
            job_id,
            step: 50,
            at: t0(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.jobs().get(job_id).unwrap().progress, 0);
    assert_eq!(state.jobs().get(job_id).unwrap().status, JobStatus::Pending);
}

#[test]
fn ticks_advance_monotonically_to_completion() {
    let (mut state, job_id) = started("a.nc");
    let max_records = SimSettings::default().max_records;

    let mut last = 0;
    let mut ticks = 0;
    let mut at = t0();
    loop {
        ticks += 1;
        at += TimeDelta::milliseconds(500);
        let (next, effects) = update(state, Msg::JobTick { job_id, step: 15, at });
        state = next;
        let job = state.jobs().get(job_id).unwrap();
        assert!(job.progress >= last);
        assert!(job.progress <= 100);
        last = job.progress;

        if job.status == JobStatus::Completed {
            assert_eq!(
                effects,
                vec![
                    Effect::Cancel {
                        key: TimerKey::JobTick { job_id }
                    },
                    Effect::Notify(Notification::info(
                        "Processing Complete",
                        "Successfully processed a.nc"
                    )),
                ]
            );
            break;
        }
        assert!(effects.is_empty());
        assert_eq!(
            job.records_processed,
            Some(u32::from(job.progress) * max_records / 100)
        );
    }

    // ceil(100 / 15)
    assert_eq!(ticks, 7);
    let job = state.jobs().get(job_id).unwrap();
    assert_eq!(job.progress, 100);
    assert_eq!(job.records_processed, Some(max_records));
    assert_eq!(job.end_time, Some(at));
    assert!(job.end_time >= job.start_time);
}

#[test]
fn completed_job_is_terminal() {
    let (state, job_id) = started("a.nc");
    let (mut state, _) = update(
        state,
        Msg::JobTick {
            job_id,
            step: 100,
            at: t0(),
        },
    );
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(
        state,
        Msg::JobTick {
            job_id,
            step: 5,
            at: t0() + TimeDelta::seconds(1),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn completed_row_reports_duration_and_records() {
    let (state, job_id) = started("a.nc");
    let (state, _) = update(
        state,
        Msg::JobTick {
            job_id,
            step: 100,
            at: t0() + TimeDelta::seconds(7),
        },
    );

    let view = state.view();
    let row = &view.jobs[0];
    assert_eq!(row.progress_label, "100%");
    assert_eq!(row.records_label.as_deref(), Some("15,000"));
    assert_eq!(row.duration_secs, Some(7));
    assert_eq!(view.job_counts.completed, 1);
}

#[test]
fn interleaved_jobs_progress_independently() {
    let (state, _) = submit_path(AppState::new(), "/a/first.nc");
    let (state, _) = submit_path(state, "/b/second.nc");
    let second = state.jobs().jobs()[0].id;
    let first = state.jobs().jobs()[1].id;
    assert_ne!(first, second);

    let (state, _) = update(state, Msg::JobStartDue { job_id: second, at: t0() });
    let (mut state, _) = update(state, Msg::JobStartDue { job_id: first, at: t0() });

    for round in 0..10 {
        let at = t0() + TimeDelta::milliseconds(500 * (round + 1));
        let (next, _) = update(state, Msg::JobTick { job_id: first, step: 10, at });
        let (next, _) = update(next, Msg::JobTick { job_id: second, step: 25, at });
        state = next;
    }

    for job_id in [first, second] {
        let job = state.jobs().get(job_id).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.progress, 100);
        assert_eq!(job.records_processed, Some(15_000));
    }
    // The faster job finished first.
    assert!(state.jobs().get(second).unwrap().end_time < state.jobs().get(first).unwrap().end_time);
}

#[test]
fn seeded_jobs_keep_ids_unique() {
    let state = AppState::seeded(SimSettings::default(), t0());
    assert_eq!(state.jobs().jobs().len(), 3);

    let (state, _) = submit_path(state, "new.nc");
    let mut ids: Vec<_> = state.jobs().jobs().iter().map(|j| j.id).collect();
    assert_eq!(ids[0], 4);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    let counts = state.view().job_counts;
    assert_eq!(
        (counts.pending, counts.processing, counts.completed, counts.error),
        (2, 1, 1, 0)
    );
}
