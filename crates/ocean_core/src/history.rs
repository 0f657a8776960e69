use chrono::{DateTime, Utc};

pub type HistoryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCategory {
    Temperature,
    Salinity,
    Depth,
    Visualization,
    General,
}

impl QueryCategory {
    pub const ALL: [QueryCategory; 5] = [
        QueryCategory::Temperature,
        QueryCategory::Salinity,
        QueryCategory::Depth,
        QueryCategory::Visualization,
        QueryCategory::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QueryCategory::Temperature => "temperature",
            QueryCategory::Salinity => "salinity",
            QueryCategory::Depth => "depth",
            QueryCategory::Visualization => "visualization",
            QueryCategory::General => "general",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(QueryCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: QueryCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: HistoryId,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u32,
    pub sources: Vec<String>,
    pub starred: bool,
    pub category: QueryCategory,
}

impl HistoryItem {
    fn matches_search(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.query.to_lowercase().contains(needle_lower)
            || self.response.to_lowercase().contains(needle_lower)
    }
}

/// Past queries with the current search term and category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryHistory {
    items: Vec<HistoryItem>,
    search: String,
    category: CategoryFilter,
}

impl QueryHistory {
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Items matching both the search term and the category filter, in
    /// stored order.
    pub fn filtered(&self) -> Vec<&HistoryItem> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_search(&needle) && self.category.matches(item.category))
            .collect()
    }

    pub fn starred_count(&self) -> usize {
        self.items.iter().filter(|item| item.starred).count()
    }

    pub fn average_duration_ms(&self) -> Option<u32> {
        if self.items.is_empty() {
            return None;
        }
        let total: u64 = self.items.iter().map(|item| u64::from(item.duration_ms)).sum();
        let count = self.items.len() as u64;
        u32::try_from(total / count).ok()
    }

    pub(crate) fn set_search(&mut self, term: String) -> bool {
        if self.search == term {
            return false;
        }
        self.search = term;
        true
    }

    pub(crate) fn set_category(&mut self, filter: CategoryFilter) -> bool {
        if self.category == filter {
            return false;
        }
        self.category = filter;
        true
    }

    pub(crate) fn toggle_star(&mut self, id: HistoryId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.starred = !item.starred;
                true
            }
            None => false,
        }
    }

    pub(crate) fn extend(&mut self, items: Vec<HistoryItem>) {
        self.items.extend(items);
    }
}
