//! Rendered recommendation list
//!
//! The view model derived from the last received [`Recommendations`]. Front
//! ends (terminal, browser) draw it; they never mutate it in place.

use std::fmt;

use serde::Serialize;

use super::message::Recommendations;

/// Text of the single entry shown when the server finds nothing
pub const NO_RECOMMENDATIONS: &str = "No se encontraron recomendaciones";

/// Visual state of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Item,
    Error,
}

/// One line of the rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub text: String,
    pub kind: EntryKind,
}

impl ListEntry {
    pub fn item(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Item,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }
}

/// Full contents of the recommendation list container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    entries: Vec<ListEntry>,
}

impl RenderedList {
    /// Build the list for a freshly received message
    pub fn render(list: &Recommendations) -> Self {
        if list.is_empty() {
            return Self {
                entries: vec![ListEntry::error(NO_RECOMMENDATIONS)],
            };
        }

        Self {
            entries: list.labels().iter().map(ListEntry::item).collect(),
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visible text of every entry, in order
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// True when the list shows the "nothing found" state
    pub fn is_no_results(&self) -> bool {
        matches!(self.entries.as_slice(), [entry] if entry.is_error())
    }
}

impl From<&Recommendations> for RenderedList {
    fn from(list: &Recommendations) -> Self {
        Self::render(list)
    }
}

impl fmt::Display for RenderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Item => writeln!(f, "  - {}", entry.text)?,
                EntryKind::Error => writeln!(f, "  ! {}", entry.text)?,
            }
        }
        Ok(())
    }
}
