use std::collections::VecDeque;
use std::time::Duration;

use ocean_core::{update, AppState, AppViewModel, Effect, JobId, Msg, Notification, TimerKey};
use ocean_logging::{ocean_debug, ocean_info, ocean_warn};

use crate::{ProgressStep, Scheduler, VirtualScheduler};

/// Owns one session's state and executes the effects `update` asks for.
///
/// Timer callbacks only run from [`pump`](Self::pump) (or
/// [`advance`](Simulator::advance) for virtual time), so all state changes
/// happen on the owning thread.
pub struct Simulator<S: Scheduler> {
    state: AppState,
    scheduler: S,
    steps: Box<dyn ProgressStep>,
    outbox: VecDeque<Notification>,
    shut_down: bool,
}

impl<S: Scheduler> Simulator<S> {
    pub fn new(state: AppState, scheduler: S, steps: Box<dyn ProgressStep>) -> Self {
        Self {
            state,
            scheduler,
            steps,
            outbox: VecDeque::new(),
            shut_down: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Applies `msg` and runs the resulting effects.
    /// Ignored once the session has been shut down.
    pub fn dispatch(&mut self, msg: Msg) {
        if self.shut_down {
            ocean_warn!("message after shutdown ignored: {:?}", msg);
            return;
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    /// Types `text` into the chat input and submits it.
    /// Returns whether a user turn was appended.
    pub fn submit_chat(&mut self, text: &str) -> bool {
        self.dispatch(Msg::ChatInputChanged(text.to_string()));
        self.submit_chat_input()
    }

    /// Submits whatever is currently in the chat input.
    pub fn submit_chat_input(&mut self) -> bool {
        let before = self.state.chat().messages().len();
        let at = self.scheduler.now();
        self.dispatch(Msg::ChatSubmitted { at });
        self.state.chat().messages().len() > before
    }

    /// Types `path` into the job path input and submits it.
    /// Returns the id of the created job.
    pub fn submit_job(&mut self, path: &str) -> Option<JobId> {
        let before = self.state.jobs().jobs().len();
        self.dispatch(Msg::JobPathChanged(path.to_string()));
        self.dispatch(Msg::JobSubmitted);
        if self.state.jobs().jobs().len() > before {
            self.state.jobs().jobs().first().map(|job| job.id)
        } else {
            None
        }
    }

    /// Runs every timer that is due right now. Returns how many fired.
    pub fn pump(&mut self) -> usize {
        let mut fired = 0;
        while !self.shut_down {
            let Some(key) = self.scheduler.poll_due() else {
                break;
            };
            fired += 1;
            self.fire(key);
        }
        fired
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain(..).collect()
    }

    /// Cancels every pending timer so no callback touches this session
    /// again. Returns how many timers were dropped.
    pub fn shutdown(&mut self) -> usize {
        if self.shut_down {
            return 0;
        }
        self.shut_down = true;
        let dropped = self.scheduler.cancel_all();
        ocean_info!("simulator shut down, {} pending timer(s) cancelled", dropped);
        dropped
    }

    fn fire(&mut self, key: TimerKey) {
        let at = self.scheduler.now();
        let msg = match key {
            TimerKey::AssistantReply { turn } => Msg::AssistantReplyDue { turn, at },
            TimerKey::JobStart { job_id } => Msg::JobStartDue { job_id, at },
            TimerKey::JobTick { job_id } => Msg::JobTick {
                job_id,
                step: self.steps.next_step(),
                at,
            },
        };
        self.dispatch(msg);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleOnce { key, delay } => self.scheduler.schedule_once(key, delay),
                Effect::ScheduleEvery { key, period } => {
                    self.scheduler.schedule_every(key, period)
                }
                Effect::Cancel { key } => {
                    if !self.scheduler.cancel(&key) {
                        ocean_debug!("cancel for unarmed timer {:?}", key);
                    }
                }
                Effect::Notify(notification) => {
                    ocean_info!("notify: {} - {}", notification.title, notification.description);
                    self.outbox.push_back(notification);
                }
            }
        }
    }
}

impl Simulator<VirtualScheduler> {
    /// Moves virtual time forward by `by`, firing timers one at a time in
    /// deadline order. Timers armed or cancelled by a callback are honored
    /// within the same call. Returns how many timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.scheduler.elapsed() + by;
        let mut fired = 0;
        while !self.shut_down {
            match self.scheduler.next_deadline() {
                Some(deadline) if deadline <= target => {
                    self.scheduler.advance_to(deadline);
                    fired += self.pump();
                }
                _ => break,
            }
        }
        self.scheduler.advance_to(target);
        fired
    }

    /// Advances in `step` increments until no timer is armed or `limit` of
    /// virtual time has passed. Returns whether the session went idle.
    pub fn run_until_idle(&mut self, step: Duration, limit: Duration) -> bool {
        let step = step.max(Duration::from_millis(1));
        let start = self.scheduler.elapsed();
        while self.scheduler.pending() > 0 {
            if self.scheduler.elapsed() - start >= limit {
                return false;
            }
            self.advance(step);
        }
        true
    }
}

impl<S: Scheduler> Drop for Simulator<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
