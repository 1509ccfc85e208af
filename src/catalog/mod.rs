//! Catalog Layer
//!
//! Read-only collections with the generic filter engine and aggregates.

mod traits;
mod state;
mod filter;
pub mod aggregate;


use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult};

pub use traits::Filterable;
pub use state::{Chip, ChipSelector, FilterEvent, FilterState, Selection, ALL_LABEL};
pub use filter::{filter, matches, matches_query};

/// A fixed, validated collection of records plus its declared facet values
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    name: String,
    items: Vec<T>,
    facets: Vec<String>,
}

impl<T: Filterable> Catalog<T> {
    /// Build a catalog, checking id uniqueness and that every facet is declared.
    /// The declared facets must be distinct and must not shadow the "All" chip.
    pub fn new(name: &str, items: Vec<T>, facets: Vec<String>) -> DomainResult<Self> {
        let mut declared = HashSet::new();
        for facet in &facets {
            if facet == ALL_LABEL {
                return Err(DomainError::ReservedCategory {
                    collection: name.to_string(),
                    value: facet.clone(),
                });
            }
            if !declared.insert(facet.as_str()) {
                return Err(DomainError::DuplicateCategory {
                    collection: name.to_string(),
                    value: facet.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DomainError::DuplicateId {
                    collection: name.to_string(),
                    id: item.id(),
                });
            }
            if !facets.iter().any(|facet| facet == item.facet()) {
                return Err(DomainError::UnknownCategory {
                    collection: name.to_string(),
                    value: item.facet().to_string(),
                });
            }
        }

        log::debug!("Catalog '{}' built with {} items, {} facets", name, items.len(), facets.len());
        Ok(Self {
            name: name.to_string(),
            items,
            facets,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All records in declaration order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn facets(&self) -> &[String] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a record by ID
    pub fn get(&self, id: u32) -> DomainResult<&T> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {}", self.name, id)))
    }

    /// Chip row for this collection
    pub fn chip_selector(&self) -> ChipSelector {
        ChipSelector::new(self.facets.iter().cloned())
    }

    /// Visible subset for the given state
    pub fn filter(&self, state: &FilterState) -> Vec<&T> {
        if let Selection::Only(value) = &state.selection {
            if !self.facets.contains(value) {
                log::warn!("Stale selection '{}' on {}, nothing matches", value, self.name);
            }
        }

        let result = filter(&self.items, state);
        log::debug!(
            "Filtered {}: selection={:?} query={:?} -> {}/{}",
            self.name,
            state.selection.label(),
            state.query,
            result.len(),
            self.items.len()
        );
        result
    }
}
