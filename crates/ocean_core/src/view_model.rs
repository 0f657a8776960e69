use crate::format::{format_with_commas, progress_label};
use crate::{
    CategoryFilter, ComponentStatus, HistoryItem, JobId, JobStatus, LoadLevel, Message,
    ProcessingJob, StatusSummary, SystemComponent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub chat: ChatView,
    pub path_input: String,
    pub jobs: Vec<JobRowView>,
    pub job_counts: JobCounts,
    pub history: HistoryView,
    pub system: SystemView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub messages: Vec<Message>,
    pub input: String,
    pub in_flight: bool,
    pub quick_queries: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub filename: String,
    pub size: String,
    pub status: JobStatus,
    pub progress: u8,
    pub progress_label: String,
    pub records_label: Option<String>,
    /// Whole seconds between start and end, for finished jobs.
    pub duration_secs: Option<i64>,
    pub error_message: Option<String>,
}

impl From<&ProcessingJob> for JobRowView {
    fn from(job: &ProcessingJob) -> Self {
        let duration_secs = match (job.status, job.start_time, job.end_time) {
            (JobStatus::Completed, Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        };

        Self {
            job_id: job.id,
            filename: job.filename.clone(),
            size: job.size.clone(),
            status: job.status,
            progress: job.progress,
            progress_label: progress_label(job.progress),
            records_label: job
                .records_processed
                .map(|records| format_with_commas(u64::from(records))),
            duration_secs,
            error_message: job.error_message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub error: usize,
}

impl JobCounts {
    pub(crate) fn from_rows(rows: &[JobRowView]) -> Self {
        let mut counts = Self::default();
        for row in rows {
            match row.status {
                JobStatus::Pending => counts.pending += 1,
                JobStatus::Processing => counts.processing += 1,
                JobStatus::Completed => counts.completed += 1,
                JobStatus::Error => counts.error += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    /// Items passing the current search and category filter.
    pub items: Vec<HistoryItem>,
    pub search: String,
    pub category: CategoryFilter,
    pub total: usize,
    pub starred: usize,
    pub average_duration_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRowView {
    pub name: String,
    pub status: ComponentStatus,
    pub uptime: String,
    pub response_time: Option<String>,
    pub load: Option<u8>,
    pub load_level: Option<LoadLevel>,
    pub memory: Option<u8>,
    pub details: String,
}

impl From<&SystemComponent> for ComponentRowView {
    fn from(component: &SystemComponent) -> Self {
        Self {
            name: component.name.clone(),
            status: component.status,
            uptime: component.uptime.clone(),
            response_time: component.response_time.clone(),
            load: component.load,
            load_level: component.load.map(LoadLevel::classify),
            memory: component.memory,
            details: component.details.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemView {
    pub components: Vec<ComponentRowView>,
    pub summary: StatusSummary,
}
