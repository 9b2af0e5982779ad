use serde::Serialize;

/// What the user intends to do with the laptop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Purpose {
    Business,
    Productivity,
    Gaming,
    Design,
    Engineering,
    #[serde(rename = "Content Creation")]
    ContentCreation,
    #[serde(rename = "light productivity")]
    LightProductivity,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "web-based tasks")]
    WebBasedTasks,
}

impl Purpose {
    pub const ALL: [Purpose; 9] = [
        Purpose::Business,
        Purpose::Productivity,
        Purpose::Gaming,
        Purpose::Design,
        Purpose::Engineering,
        Purpose::ContentCreation,
        Purpose::LightProductivity,
        Purpose::Entertainment,
        Purpose::WebBasedTasks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Business => "Business",
            Purpose::Productivity => "Productivity",
            Purpose::Gaming => "Gaming",
            Purpose::Design => "Design",
            Purpose::Engineering => "Engineering",
            Purpose::ContentCreation => "Content Creation",
            Purpose::LightProductivity => "light productivity",
            Purpose::Entertainment => "entertainment",
            Purpose::WebBasedTasks => "web-based tasks",
        }
    }

    /// Catalog category that serves this purpose
    pub fn category(&self) -> &'static str {
        match self {
            Purpose::Business | Purpose::Productivity => "Ultrabook",
            Purpose::Gaming => "Gaming",
            Purpose::Design | Purpose::Engineering | Purpose::ContentCreation => "Workstation",
            Purpose::LightProductivity | Purpose::Entertainment => "2 in 1 Convertible",
            Purpose::WebBasedTasks => "Notebook",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}
