//! Filter State
//!
//! The per-screen filter value and its pure transition function,
//! plus the single-select chip row derived from a collection's facets.

use serde::{Deserialize, Serialize};

/// Label of the sentinel chip that disables facet filtering
pub const ALL_LABEL: &str = "All";

/// Active chip: everything, or exactly one facet value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Map a chip label to a selection ("All" is the sentinel)
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Only(value) => value.as_str(),
        }
    }

    /// Category rule: `All` passes everything, otherwise exact equality
    pub fn matches(&self, facet: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == facet,
        }
    }
}

/// User input that changes a screen's filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterEvent {
    /// A chip was tapped
    SelectChip(String),
    /// The search field emitted its current text
    QueryChanged(String),
}

/// Current chip selection and search text of one screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub selection: Selection,
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(label: &str) -> Self {
        Self {
            selection: Selection::from_label(label),
            query: String::new(),
        }
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Pure transition. Selecting the active chip again keeps it active.
    pub fn apply(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::SelectChip(label) => Self {
                selection: Selection::from_label(&label),
                ..self
            },
            FilterEvent::QueryChanged(query) => Self { query, ..self },
        }
    }

    /// True when neither the chip nor the query narrows anything
    pub fn is_identity(&self) -> bool {
        self.selection == Selection::All && self.query.is_empty()
    }
}

/// One rendered chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    pub active: bool,
}

/// Single-select chip row: "All" followed by the declared facets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSelector {
    labels: Vec<String>,
}

impl ChipSelector {
    pub fn new<I, S>(facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels = vec![ALL_LABEL.to_string()];
        labels.extend(facets.into_iter().map(Into::into));
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the selection names a chip that exists in this row
    pub fn is_known(&self, selection: &Selection) -> bool {
        self.labels.iter().any(|label| label == selection.label())
    }

    /// Chips with the active flag set; none is active for a stale selection
    pub fn chips(&self, state: &FilterState) -> Vec<Chip> {
        let active = state.selection.label();
        self.labels
            .iter()
            .map(|label| Chip {
                label: label.clone(),
                active: label == active,
            })
            .collect()
    }
}
