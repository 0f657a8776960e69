use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input box.
    ChatInputChanged(String),
    /// User submitted the current chat input.
    ChatSubmitted { at: DateTime<Utc> },
    /// User picked one of the suggested prompts by index.
    QuickQuerySelected(usize),
    /// Reply timer for a chat turn fired.
    AssistantReplyDue {
        turn: crate::MessageId,
        at: DateTime<Utc>,
    },
    /// User edited the file path input.
    JobPathChanged(String),
    /// User submitted the current file path for processing.
    JobSubmitted,
    /// Start delay for a pending job elapsed.
    JobStartDue {
        job_id: crate::JobId,
        at: DateTime<Utc>,
    },
    /// Progress tick for a processing job; `step` is the percentage increment.
    JobTick {
        job_id: crate::JobId,
        step: u8,
        at: DateTime<Utc>,
    },
    /// User edited the history search box.
    HistorySearchChanged(String),
    /// User picked a history category filter.
    HistoryCategorySelected(crate::CategoryFilter),
    /// User toggled the star on a history item.
    HistoryStarToggled(crate::HistoryId),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
