use serde::{Deserialize, Serialize};

/// One role in the work history. Responsibilities render in list order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkHistoryEntry {
    pub organization: String,
    pub title_line: String,
    pub location_line: String,
    pub date_range: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl EducationEntry {
    /// Organization and year joined by `" · "`, or whichever one is present.
    /// `None` when neither is set, so no empty secondary line is emitted.
    pub fn secondary_line(&self) -> Option<String> {
        match (self.organization.as_deref(), self.year.as_deref()) {
            (Some(org), Some(year)) => Some(format!("{org} · {year}")),
            (Some(org), None) => Some(org.to_string()),
            (None, Some(year)) => Some(year.to_string()),
            (None, None) => None,
        }
    }
}

/// A single line of miscellaneous information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct NoteEntry(pub String);

impl NoteEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
