//! Domain Layer
//!
//! Contains all catalog records and core abstractions.
//! Depends only on serde, chrono and thiserror.

mod entity;
mod content;
mod article;
mod video;
mod tutorial;
mod featured;
mod profile;

pub use entity::{Entity, DomainError, DomainResult};
pub use content::{ContentKind, Difficulty};
pub use article::Article;
pub use video::Video;
pub use tutorial::Tutorial;
pub use featured::{FeaturedItem, FeaturedMeta};
pub use profile::{Achievement, ActivityAction, ActivityEntry, UserProfile};
