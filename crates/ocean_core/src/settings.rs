use std::time::Duration;

/// Upper bound of a job's completion percentage.
pub const MAX_PROGRESS: u8 = 100;

pub const DEFAULT_SIZE_LABEL: &str = "156.3 MB";

pub const DEFAULT_CITATIONS: [&str; 3] = [
    "ARGO Float Dataset #12345",
    "Ocean Temperature Atlas 2023",
    "Marine Biology Research Paper #67890",
];

/// Timing and output constants for both simulators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSettings {
    /// Delay between a chat submission and the assistant reply.
    pub reply_delay: Duration,
    /// Delay between a job submission and its move to `Processing`.
    pub job_start_delay: Duration,
    /// Interval between progress ticks of a processing job.
    pub tick_period: Duration,
    /// Record count reported once a job completes.
    pub max_records: u32,
    /// Size label attached to every submitted job.
    pub size_label: String,
    /// Citation labels attached to every assistant reply.
    pub citations: Vec<String>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1500),
            job_start_delay: Duration::from_millis(1000),
            tick_period: Duration::from_millis(500),
            max_records: 15_000,
            size_label: DEFAULT_SIZE_LABEL.to_string(),
            citations: DEFAULT_CITATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
