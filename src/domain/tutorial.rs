//! Tutorial Entity
//!
//! Hands-on, multi-step lessons. Filtered by difficulty rather than category.

use serde::{Deserialize, Serialize};
use super::content::Difficulty;
use super::entity::Entity;

/// A step-by-step tutorial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub steps: u32,
    pub participants: u32,
    /// Average learner rating, 0.0 to 5.0
    pub rating: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tools: Vec<String>,
    /// Topic label (informational, not a filter key)
    pub category: String,
}

impl Tutorial {
    pub fn new(id: u32, title: &str, difficulty: Difficulty, steps: u32, rating: f64) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            difficulty,
            duration_minutes: 0,
            steps,
            participants: 0,
            rating,
            completed: false,
            tools: Vec::new(),
            category: String::new(),
        }
    }
}

impl Entity for Tutorial {
    fn id(&self) -> u32 {
        self.id
    }
}
