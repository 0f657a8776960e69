use chrono::{DateTime, Utc};

use crate::MAX_PROGRESS;

pub type JobId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    /// Never produced by the simulator; kept so consumers handle it.
    Error,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Processing => "Processing",
            JobStatus::Completed => "Completed",
            JobStatus::Error => "Error",
        }
    }

    pub fn is_terminal(self) -> bool {
        match self {
            JobStatus::Completed | JobStatus::Error => true,
            JobStatus::Pending | JobStatus::Processing => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingJob {
    pub id: JobId,
    pub filename: String,
    pub status: JobStatus,
    pub progress: u8,
    pub size: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub records_processed: Option<u32>,
    pub error_message: Option<String>,
}

/// Display name for a submitted path: its last `/` segment, or the whole
/// trimmed path when that segment is empty.
pub fn display_name(path: &str) -> String {
    let trimmed = path.trim();
    match trimmed.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => trimmed.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    Advanced,
    Completed,
    Ignored,
}

/// Newest-first job list of the processing simulator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobBoard {
    jobs: Vec<ProcessingJob>,
    path_input: String,
    last_id: JobId,
}

impl JobBoard {
    pub fn jobs(&self) -> &[ProcessingJob] {
        &self.jobs
    }

    pub fn get(&self, job_id: JobId) -> Option<&ProcessingJob> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub(crate) fn set_path_input(&mut self, path: String) {
        self.path_input = path;
    }

    /// Creates a pending job from the current path input and puts it first.
    /// Returns `None` for a blank path, leaving the board untouched.
    pub(crate) fn submit(&mut self, size_label: &str) -> Option<JobId> {
        if self.path_input.trim().is_empty() {
            return None;
        }

        let path = std::mem::take(&mut self.path_input);
        self.last_id += 1;
        let job = ProcessingJob {
            id: self.last_id,
            filename: display_name(&path),
            status: JobStatus::Pending,
            progress: 0,
            size: size_label.to_string(),
            start_time: None,
            end_time: None,
            records_processed: None,
            error_message: None,
        };
        self.jobs.insert(0, job);
        Some(self.last_id)
    }

    /// Moves a pending job to processing. Returns false for any other status.
    pub(crate) fn start(&mut self, job_id: JobId, at: DateTime<Utc>) -> bool {
        match self.get_mut(job_id) {
            Some(job) if job.status == JobStatus::Pending => {
                job.status = JobStatus::Processing;
                job.start_time = Some(at);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn tick(
        &mut self,
        job_id: JobId,
        step: u8,
        at: DateTime<Utc>,
        max_records: u32,
    ) -> TickOutcome {
        let Some(job) = self.get_mut(job_id) else {
            return TickOutcome::Ignored;
        };
        if job.status != JobStatus::Processing {
            return TickOutcome::Ignored;
        }

        // A zero step would stall the job forever.
        let step = step.max(1);
        job.progress = job.progress.saturating_add(step).min(MAX_PROGRESS);

        if job.progress >= MAX_PROGRESS {
            job.status = JobStatus::Completed;
            job.progress = MAX_PROGRESS;
            job.end_time = Some(at);
            job.records_processed = Some(max_records);
            TickOutcome::Completed
        } else {
            job.records_processed = Some(records_for(job.progress, max_records));
            TickOutcome::Advanced
        }
    }

    /// Appends pre-built jobs after the existing ones, keeping ids unique.
    pub(crate) fn extend_samples(&mut self, samples: Vec<ProcessingJob>) {
        for mut job in samples {
            self.last_id += 1;
            job.id = self.last_id;
            self.jobs.push(job);
        }
    }

    fn get_mut(&mut self, job_id: JobId) -> Option<&mut ProcessingJob> {
        self.jobs.iter_mut().find(|job| job.id == job_id)
    }
}

fn records_for(progress: u8, max_records: u32) -> u32 {
    let scaled = u64::from(progress) * u64::from(max_records) / u64::from(MAX_PROGRESS);
    u32::try_from(scaled).unwrap_or(max_records)
}
