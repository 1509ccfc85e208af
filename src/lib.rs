//! LearnHub Core
//!
//! Layered architecture:
//! - domain: Catalog records and core abstractions
//! - catalog: Generic filter engine, filter state and aggregates
//! - seed: Read-only seed configuration, validated into a `Library`
//! - screens: Per-screen view models consumed by the renderer

pub mod domain;
pub mod catalog;
pub mod seed;
pub mod screens;
pub mod logging;

pub use catalog::{Catalog, FilterEvent, FilterState, Filterable, Selection};
pub use domain::{DomainError, DomainResult};
pub use seed::Library;
