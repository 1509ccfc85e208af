//! Tutorials Screen
//!
//! Difficulty chips and a stats card computed over the whole collection.

use serde::{Deserialize, Serialize};

use super::format;
use super::Browse;
use crate::catalog::aggregate::{average, count, round_to_one_decimal, sum};
use crate::catalog::{Chip, FilterEvent, FilterState};
use crate::domain::Tutorial;
use crate::seed::Library;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub difficulty: String,
    pub difficulty_color: String,
    pub duration: String,
    pub steps: u32,
    pub participants: String,
    pub rating: f64,
    pub completed: bool,
    pub tools: Vec<String>,
    pub category: String,
}

impl From<&Tutorial> for TutorialCard {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            id: tutorial.id,
            title: tutorial.title.clone(),
            description: tutorial.description.clone(),
            image: tutorial.image.clone(),
            difficulty: tutorial.difficulty.as_str().to_string(),
            difficulty_color: tutorial.difficulty.color().to_string(),
            duration: format::hours(tutorial.duration_minutes),
            steps: tutorial.steps,
            participants: format::compact_count(tutorial.participants),
            rating: tutorial.rating,
            completed: tutorial.completed,
            tools: tutorial.tools.clone(),
            category: tutorial.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TutorialStats {
    pub completed: usize,
    pub total_steps: u64,
    /// Rounded to one decimal; `None` when there is nothing to average
    pub average_rating: Option<f64>,
}

impl TutorialStats {
    pub fn of(tutorials: &[Tutorial]) -> Self {
        Self {
            completed: count(tutorials, |t| t.completed),
            total_steps: sum(tutorials, |t| u64::from(t.steps)),
            average_rating: average(tutorials, |t| t.rating)
                .ok()
                .map(round_to_one_decimal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialsView {
    pub stats: TutorialStats,
    pub chips: Vec<Chip>,
    pub tutorials: Vec<TutorialCard>,
}

pub struct TutorialsScreen<'a> {
    browse: Browse<'a, Tutorial>,
}

impl<'a> TutorialsScreen<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            browse: Browse::new(&library.tutorials),
        }
    }

    pub fn state(&self) -> &FilterState {
        self.browse.state()
    }

    pub fn select_difficulty(&mut self, label: &str) {
        self.browse.handle(FilterEvent::SelectChip(label.to_string()));
    }

    pub fn view(&self) -> TutorialsView {
        TutorialsView {
            stats: TutorialStats::of(self.browse.catalog().items()),
            chips: self.browse.chips(),
            tutorials: self.browse.visible().into_iter().map(TutorialCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    #[test]
    fn test_stats_card() {
        let library = Library::bundled().unwrap();
        let view = TutorialsScreen::new(&library).view();

        assert_eq!(view.stats.completed, 1);
        assert_eq!(view.stats.total_steps, 75);
        assert_eq!(view.stats.average_rating, Some(4.8));
    }

    #[test]
    fn test_stats_of_empty_collection() {
        let stats = TutorialStats::of(&[]);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_steps, 0);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn test_total_steps_past_u32_range() {
        let tutorials = vec![
            Tutorial::new(1, "Design Ops at Scale", Difficulty::Advanced, u32::MAX, 4.5),
            Tutorial::new(2, "Token Pipelines", Difficulty::Advanced, u32::MAX, 4.7),
        ];

        let stats = TutorialStats::of(&tutorials);
        assert_eq!(stats.total_steps, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_difficulty_chips_and_filter() {
        let library = Library::bundled().unwrap();
        let mut screen = TutorialsScreen::new(&library);
        screen.select_difficulty("Beginner");

        let view = screen.view();
        let labels: Vec<&str> = view.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Beginner", "Intermediate", "Advanced"]);
        assert!(view.chips[1].active);

        let ids: Vec<u32> = view.tutorials.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(view.tutorials[0].difficulty_color, "#10B981");
        assert_eq!(view.tutorials[0].duration, "2.5 hours");
        assert_eq!(view.tutorials[1].participants, "4.5k");
    }

    #[test]
    fn test_stats_ignore_active_chip() {
        let library = Library::bundled().unwrap();
        let mut screen = TutorialsScreen::new(&library);
        screen.select_difficulty("Intermediate");

        let view = screen.view();
        assert_eq!(view.tutorials.len(), 1);
        assert_eq!(view.stats.total_steps, 75);
    }
}
