//! OceanDash core: pure state machine and view-model helpers.
//!
//! Nothing in this crate reads a clock, draws random numbers or sleeps.
//! Time stamps and progress steps arrive inside [`Msg`] values, and timer
//! requests leave as [`Effect`] values for a driver to execute.
mod chat;
mod effect;
mod format;
mod history;
mod jobs;
mod msg;
mod samples;
mod settings;
mod state;
mod status;
mod update;
mod view_model;

pub use chat::{assistant_reply, ChatState, Message, MessageId, Role, QUICK_QUERIES};
pub use effect::{Effect, Notification, Severity, TimerKey};
pub use format::{duration_label, format_with_commas, progress_label, relative_label};
pub use history::{CategoryFilter, HistoryId, HistoryItem, QueryCategory, QueryHistory};
pub use jobs::{display_name, JobBoard, JobId, JobStatus, ProcessingJob};
pub use msg::Msg;
pub use settings::{SimSettings, DEFAULT_CITATIONS, DEFAULT_SIZE_LABEL, MAX_PROGRESS};
pub use state::AppState;
pub use status::{ComponentStatus, LoadLevel, StatusSummary, SystemComponent};
pub use update::update;
pub use view_model::{
    AppViewModel, ChatView, ComponentRowView, HistoryView, JobCounts, JobRowView, SystemView,
};
