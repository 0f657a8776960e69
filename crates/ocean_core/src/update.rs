use ocean_logging::{ocean_debug, ocean_info};

use crate::jobs::TickOutcome;
use crate::{AppState, Effect, Msg, Notification, TimerKey, QUICK_QUERIES};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ChatInputChanged(text) => {
            if state.chat().input() != text {
                state.chat_mut().set_input(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::QuickQuerySelected(index) => {
            if let Some(query) = QUICK_QUERIES.get(index) {
                state.chat_mut().set_input((*query).to_string());
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ChatSubmitted { at } => match state.chat_mut().submit(at) {
            Some(turn) => {
                ocean_debug!("chat turn {} submitted", turn);
                state.mark_dirty();
                vec![Effect::ScheduleOnce {
                    key: TimerKey::AssistantReply { turn },
                    delay: state.settings().reply_delay,
                }]
            }
            None => {
                ocean_debug!(
                    "chat submission rejected (in_flight={})",
                    state.chat().is_in_flight()
                );
                Vec::new()
            }
        },
        Msg::AssistantReplyDue { turn, at } => {
            let citations = state.settings().citations.clone();
            if state.chat_mut().complete(turn, at, &citations) {
                state.mark_dirty();
                vec![Effect::Notify(Notification::info(
                    "Query Processed",
                    "OceanGPT has analyzed your request and provided a response.",
                ))]
            } else {
                ocean_debug!("reply for stale turn {} ignored", turn);
                Vec::new()
            }
        }
        Msg::JobPathChanged(path) => {
            if state.jobs().path_input() != path {
                state.jobs_mut().set_path_input(path);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobSubmitted => {
            let size_label = state.settings().size_label.clone();
            match state.jobs_mut().submit(&size_label) {
                Some(job_id) => {
                    ocean_info!("job {} queued", job_id);
                    state.mark_dirty();
                    vec![Effect::ScheduleOnce {
                        key: TimerKey::JobStart { job_id },
                        delay: state.settings().job_start_delay,
                    }]
                }
                None => vec![Effect::Notify(Notification::error(
                    "Error",
                    "Please specify a file path",
                ))],
            }
        }
        Msg::JobStartDue { job_id, at } => {
            if state.jobs_mut().start(job_id, at) {
                ocean_info!("job {} processing", job_id);
                state.mark_dirty();
                vec![Effect::ScheduleEvery {
                    key: TimerKey::JobTick { job_id },
                    period: state.settings().tick_period,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::JobTick { job_id, step, at } => {
            let max_records = state.settings().max_records;
            match state.jobs_mut().tick(job_id, step, at, max_records) {
                TickOutcome::Advanced => {
                    state.mark_dirty();
                    Vec::new()
                }
                TickOutcome::Completed => {
                    state.mark_dirty();
                    let filename = state
                        .jobs()
                        .get(job_id)
                        .map(|job| job.filename.clone())
                        .unwrap_or_default();
                    ocean_info!("job {} completed ({})", job_id, filename);
                    vec![
                        Effect::Cancel {
                            key: TimerKey::JobTick { job_id },
                        },
                        Effect::Notify(Notification::info(
                            "Processing Complete",
                            format!("Successfully processed {filename}"),
                        )),
                    ]
                }
                TickOutcome::Ignored => Vec::new(),
            }
        }
        Msg::HistorySearchChanged(term) => {
            if state.history_mut().set_search(term) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HistoryCategorySelected(filter) => {
            if state.history_mut().set_category(filter) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HistoryStarToggled(id) => {
            if state.history_mut().toggle_star(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
