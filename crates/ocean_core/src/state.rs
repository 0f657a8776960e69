use chrono::{DateTime, TimeDelta, Utc};

use crate::chat::ChatState;
use crate::history::QueryHistory;
use crate::jobs::JobBoard;
use crate::samples;
use crate::status::{StatusSummary, SystemComponent};
use crate::view_model::{
    AppViewModel, ChatView, ComponentRowView, HistoryView, JobCounts, JobRowView, SystemView,
};
use crate::{SimSettings, QUICK_QUERIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: SimSettings,
    chat: ChatState,
    jobs: JobBoard,
    history: QueryHistory,
    components: Vec<SystemComponent>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(SimSettings::default())
    }

    /// Empty chat, job and history collections with the given timings.
    pub fn with_settings(settings: SimSettings) -> Self {
        Self {
            settings,
            chat: ChatState::default(),
            jobs: JobBoard::default(),
            history: QueryHistory::default(),
            components: samples::system_components(),
            dirty: false,
        }
    }

    /// Session pre-filled with the greeting, sample jobs and query history,
    /// all dated relative to `now`.
    pub fn seeded(settings: SimSettings, now: DateTime<Utc>) -> Self {
        let mut state = Self::with_settings(settings);
        state.chat.push_greeting(now - TimeDelta::minutes(5));
        state.jobs.extend_samples(samples::sample_jobs(now));
        state.history.extend(samples::sample_history(now));
        state
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn jobs(&self) -> &JobBoard {
        &self.jobs
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    pub fn components(&self) -> &[SystemComponent] {
        &self.components
    }

    pub fn view(&self) -> AppViewModel {
        let jobs: Vec<JobRowView> = self.jobs.jobs().iter().map(JobRowView::from).collect();
        let job_counts = JobCounts::from_rows(&jobs);

        AppViewModel {
            chat: ChatView {
                messages: self.chat.messages().to_vec(),
                input: self.chat.input().to_string(),
                in_flight: self.chat.is_in_flight(),
                quick_queries: QUICK_QUERIES.to_vec(),
            },
            path_input: self.jobs.path_input().to_string(),
            jobs,
            job_counts,
            history: HistoryView {
                items: self.history.filtered().into_iter().cloned().collect(),
                search: self.history.search().to_string(),
                category: self.history.category(),
                total: self.history.items().len(),
                starred: self.history.starred_count(),
                average_duration_ms: self.history.average_duration_ms(),
            },
            system: SystemView {
                components: self
                    .components
                    .iter()
                    .map(ComponentRowView::from)
                    .collect(),
                summary: StatusSummary::from_components(&self.components),
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn chat_mut(&mut self) -> &mut ChatState {
        &mut self.chat
    }

    pub(crate) fn jobs_mut(&mut self) -> &mut JobBoard {
        &mut self.jobs
    }

    pub(crate) fn history_mut(&mut self) -> &mut QueryHistory {
        &mut self.history
    }
}
