//! Video Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A recorded video lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub duration_seconds: u32,
    pub instructor: String,
    pub views: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Video {
    pub fn new(id: u32, title: &str, category: &str, duration_seconds: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            category: category.to_string(),
            duration_seconds,
            instructor: String::new(),
            views: 0,
            completed: false,
            bookmarked: false,
        }
    }
}

impl Entity for Video {
    fn id(&self) -> u32 {
        self.id
    }
}
