use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use ocean_core::{
    duration_label, format_with_commas, relative_label, AppViewModel, CategoryFilter, ChatView,
    HistoryView, JobId, JobRowView, JobStatus, LoadLevel, Message, Notification, Role, Severity,
    SystemView,
};

/// Turns successive view models into terminal lines, printing only what
/// changed since the previous call.
#[derive(Debug, Default)]
pub struct Renderer {
    shown_messages: usize,
    shown_thinking: bool,
    job_marks: HashMap<JobId, (JobStatus, u8)>,
}

impl Renderer {
    pub fn changes(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();

        for message in view.chat.messages.iter().skip(self.shown_messages) {
            lines.extend(message_lines(message));
        }
        self.shown_messages = view.chat.messages.len();

        if view.chat.in_flight && !self.shown_thinking {
            lines.push("  ~ OceanGPT is thinking...".to_string());
        }
        self.shown_thinking = view.chat.in_flight;

        // Oldest first, so a fresh submission prints after older updates.
        for row in view.jobs.iter().rev() {
            let mark = (row.status, row.progress);
            if self.job_marks.insert(row.job_id, mark) != Some(mark) {
                lines.push(job_line(row));
            }
        }

        lines
    }
}

pub fn notification(notice: &Notification) -> String {
    let tag = match notice.severity {
        Severity::Info => "*",
        Severity::Error => "!",
    };
    format!("[{tag}] {}: {}", notice.title, notice.description)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

fn message_lines(message: &Message) -> Vec<String> {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "OceanGPT",
    };
    let mut lines = vec![format!(
        "[{}] {speaker}: {}",
        timestamp(message.timestamp),
        message.content
    )];
    if let Some(sources) = &message.sources {
        lines.push(format!("    sources: {}", sources.join(" | ")));
    }
    lines
}

fn job_line(row: &JobRowView) -> String {
    let detail = match row.status {
        JobStatus::Pending => String::new(),
        JobStatus::Processing => match &row.records_label {
            Some(records) => format!(" {} ({records} records processed)", row.progress_label),
            None => format!(" {}", row.progress_label),
        },
        JobStatus::Completed => {
            let records = row.records_label.as_deref().unwrap_or("0");
            match row.duration_secs {
                Some(secs) => format!(" {records} records processed in {secs}s"),
                None => format!(" {records} records processed"),
            }
        }
        JobStatus::Error => format!(" {}", row.error_message.as_deref().unwrap_or("failed")),
    };
    format!(
        "  #{:<3} {:<10} {} ({}){detail}",
        row.job_id,
        row.status.label(),
        row.filename,
        row.size
    )
}

pub fn chat(view: &ChatView) -> Vec<String> {
    let mut lines: Vec<String> = view.messages.iter().flat_map(message_lines).collect();
    if view.in_flight {
        lines.push("  ~ OceanGPT is thinking...".to_string());
    }
    lines.push("Quick queries:".to_string());
    for (index, query) in view.quick_queries.iter().enumerate() {
        lines.push(format!("  {}. {query}", index + 1));
    }
    lines
}

pub fn jobs(view: &AppViewModel) -> Vec<String> {
    let counts = view.job_counts;
    let mut lines = vec![format!(
        "Processing queue: {} pending, {} processing, {} completed, {} error",
        counts.pending, counts.processing, counts.completed, counts.error
    )];
    if view.jobs.is_empty() {
        lines.push("  (no jobs)".to_string());
    }
    lines.extend(view.jobs.iter().map(job_line));
    lines
}

pub fn history(view: &HistoryView, now: DateTime<Utc>) -> Vec<String> {
    let category = match view.category {
        CategoryFilter::All => "all",
        CategoryFilter::Only(category) => category.label(),
    };
    let average = view
        .average_duration_ms
        .map(duration_label)
        .unwrap_or_else(|| "-".to_string());
    let mut lines = vec![format!(
        "Query history: {} total, {} starred, avg {average} | search {:?}, category {category}",
        view.total, view.starred, view.search
    )];
    if view.items.is_empty() {
        lines.push("  (no matching queries)".to_string());
    }
    for item in &view.items {
        let star = if item.starred { "*" } else { " " };
        lines.push(format!(
            "  {star} #{} [{}] {} ({}, {})",
            item.id,
            item.category.label(),
            item.query,
            relative_label(now, item.timestamp),
            duration_label(item.duration_ms)
        ));
        lines.push(format!("      {}", item.response));
    }
    lines
}

pub fn system(view: &SystemView) -> Vec<String> {
    let summary = view.summary;
    let mut lines = vec![format!(
        "System status: {}/{} online, {} warning, {} offline",
        summary.online,
        summary.total(),
        summary.warning,
        summary.offline
    )];
    for component in &view.components {
        let load = match (component.load, component.load_level) {
            (Some(load), Some(level)) => {
                let marker = match level {
                    LoadLevel::Normal => "",
                    LoadLevel::Elevated => " (elevated)",
                    LoadLevel::Critical => " (critical)",
                };
                format!(" load {load}%{marker}")
            }
            _ => String::new(),
        };
        let memory = component
            .memory
            .map(|memory| format!(" mem {memory}%"))
            .unwrap_or_default();
        let response = component
            .response_time
            .as_deref()
            .map(|rt| format!(" rt {rt}"))
            .unwrap_or_default();
        lines.push(format!(
            "  {:<8} {:<26} up {}{response}{load}{memory}",
            component.status.label(),
            component.name,
            component.uptime
        ));
        lines.push(format!("           {}", component.details));
    }
    lines
}

pub fn banner(view: &AppViewModel) -> Vec<String> {
    let records: u64 = 2_400_000;
    vec![
        "OceanGPT dashboard (simulated)".to_string(),
        format!(
            "{} jobs queued | {} history entries | {} records indexed | /help for commands",
            view.jobs.len(),
            view.history.total,
            format_with_commas(records)
        ),
    ]
}
