use std::time::Duration;

use crate::{JobId, MessageId};

/// Identifies one scheduled callback. At most one timer per key is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    AssistantReply { turn: MessageId },
    JobStart { job_id: JobId },
    JobTick { job_id: JobId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `key` once after `delay`.
    ScheduleOnce { key: TimerKey, delay: Duration },
    /// Fire `key` every `period` until cancelled.
    ScheduleEvery { key: TimerKey, period: Duration },
    Cancel { key: TimerKey },
    Notify(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Transient user-visible notice (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}
