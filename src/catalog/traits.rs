//! Catalog Layer - Core Traits
//!
//! Describes which fields of a record take part in chip and text matching.
//! One generic engine serves every collection through this trait.

use crate::domain::{ActivityEntry, Article, Entity, FeaturedItem, Tutorial, Video};

/// A record that can be narrowed by a chip selection and, optionally, a text query
pub trait Filterable: Entity {
    /// Whether the owning screen exposes a search box.
    /// When false the text query is ignored.
    const SEARCHABLE: bool = false;

    /// Value compared against the active chip (exact, case-sensitive)
    fn facet(&self) -> &str;

    /// Fields scanned by the free-text query
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Filterable for Article {
    const SEARCHABLE: bool = true;

    fn facet(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }
}

impl Filterable for Video {
    fn facet(&self) -> &str {
        &self.category
    }
}

impl Filterable for Tutorial {
    fn facet(&self) -> &str {
        self.difficulty.as_str()
    }
}

impl Filterable for FeaturedItem {
    fn facet(&self) -> &str {
        &self.category
    }
}

impl Filterable for ActivityEntry {
    fn facet(&self) -> &str {
        self.kind.label()
    }
}
