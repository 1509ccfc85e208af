//! Seed Configuration
//!
//! Serde shape of the JSON file that declares every collection and the
//! static screen settings. Collections carry their facet list alongside
//! the items so chips stay in sync with the data.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Achievement, ActivityEntry, Article, ContentKind, Difficulty, FeaturedItem, Tutorial,
    UserProfile, Video,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub home: HomeConfig,
    pub articles: CollectionConfig<Article>,
    pub videos: CollectionConfig<Video>,
    pub tutorials: TutorialsConfig,
    pub profile: ProfileConfig,
}

/// Items plus the closed list of categories they may use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig<T> {
    pub categories: Vec<String>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorialsConfig {
    /// Chip order for the difficulty filter; easiest first when omitted
    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<Difficulty>,
    pub items: Vec<Tutorial>,
}

fn default_difficulties() -> Vec<Difficulty> {
    Difficulty::ALL.to_vec()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    pub featured: CollectionConfig<FeaturedItem>,
    pub tiles: Vec<CategoryTile>,
    pub weekly_goal: WeeklyGoal,
    pub trending: TrendingCard,
}

/// "Explore Categories" grid entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTile {
    pub name: String,
    pub icon: String,
    /// Library-wide item count shown under the name
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub completed_minutes: u32,
    pub target_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCard {
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    pub image: String,
    pub read_time_minutes: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub user: UserProfile,
    pub stats: LearningStats,
    pub streak: Streak,
    pub achievements: Vec<Achievement>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStats {
    pub articles_read: u32,
    pub videos_watched: u32,
    pub tutorials_done: u32,
}

/// Consecutive learning days and this week's Monday..Sunday markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub days: u32,
    pub week: [bool; 7],
}
