#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Online,
    Warning,
    Offline,
}

impl ComponentStatus {
    pub fn label(self) -> &'static str {
        match self {
            ComponentStatus::Online => "Online",
            ComponentStatus::Warning => "Warning",
            ComponentStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadLevel {
    Normal,
    Elevated,
    Critical,
}

impl LoadLevel {
    pub fn classify(load: u8) -> Self {
        match load {
            0..50 => LoadLevel::Normal,
            50..80 => LoadLevel::Elevated,
            _ => LoadLevel::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemComponent {
    pub name: String,
    pub status: ComponentStatus,
    pub uptime: String,
    pub response_time: Option<String>,
    /// Percent.
    pub load: Option<u8>,
    /// Percent.
    pub memory: Option<u8>,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub online: usize,
    pub warning: usize,
    pub offline: usize,
}

impl StatusSummary {
    pub fn from_components(components: &[SystemComponent]) -> Self {
        components
            .iter()
            .fold(Self::default(), |mut summary, component| {
                match component.status {
                    ComponentStatus::Online => summary.online += 1,
                    ComponentStatus::Warning => summary.warning += 1,
                    ComponentStatus::Offline => summary.offline += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.online + self.warning + self.offline
    }
}
