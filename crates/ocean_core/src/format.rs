//! Text helpers shared by the view model and renderers.

use chrono::{DateTime, Utc};

/// `12543` becomes `"12,543"`.
pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

pub fn progress_label(progress: u8) -> String {
    format!("{progress}%")
}

/// Milliseconds as seconds with one decimal, e.g. `"1.2s"`.
pub fn duration_label(duration_ms: u32) -> String {
    format!("{}.{}s", duration_ms / 1000, (duration_ms % 1000) / 100)
}

/// Coarse "time ago" label for `timestamp` as seen at `now`.
pub fn relative_label(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        return "Less than 1 hour ago".to_string();
    }
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }
    let days = hours / 24;
    format!("{days} day{} ago", plural(days))
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}
