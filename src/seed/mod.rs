//! Seed Layer
//!
//! Loads the read-only seed configuration and validates it into a `Library`
//! of catalogs. The bundled file is compiled in; hosts may supply their own.

mod config;

use std::path::Path;

use crate::catalog::Catalog;
use crate::domain::{
    Achievement, ActivityEntry, Article, ContentKind, DomainError, DomainResult, FeaturedItem,
    Tutorial, UserProfile, Video,
};

pub use config::{
    CategoryTile, CollectionConfig, HomeConfig, LearningStats, ProfileConfig, SeedConfig, Streak,
    TrendingCard, TutorialsConfig, WeeklyGoal,
};

const BUNDLED_SEED: &str = include_str!("../../data/catalog.json");

/// Static home screen settings
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSettings {
    pub tiles: Vec<CategoryTile>,
    pub weekly_goal: WeeklyGoal,
    pub trending: TrendingCard,
}

/// Static profile screen settings
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSettings {
    pub user: UserProfile,
    pub stats: LearningStats,
    pub streak: Streak,
    pub achievements: Vec<Achievement>,
}

/// Every collection the app browses, validated once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    pub articles: Catalog<Article>,
    pub videos: Catalog<Video>,
    pub tutorials: Catalog<Tutorial>,
    pub featured: Catalog<FeaturedItem>,
    pub activity: Catalog<ActivityEntry>,
    pub home: HomeSettings,
    pub profile: ProfileSettings,
}

impl Library {
    /// Library built from the seed file shipped with the crate
    pub fn bundled() -> DomainResult<Self> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_path(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: SeedConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidConfig(format!("Failed to parse seed: {}", e)))?;
        Self::from_config(config)
    }

    pub fn from_config(config: SeedConfig) -> DomainResult<Self> {
        let SeedConfig {
            home,
            articles,
            videos,
            tutorials,
            profile,
        } = config;

        let difficulties = tutorials
            .difficulties
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        let kinds = ContentKind::ALL
            .iter()
            .map(|k| k.label().to_string())
            .collect();

        let featured = Catalog::new("featured", home.featured.items, home.featured.categories)?;
        if let Some(tile) = home
            .tiles
            .iter()
            .find(|tile| !featured.facets().contains(&tile.name))
        {
            return Err(DomainError::UnknownCategory {
                collection: "home tiles".to_string(),
                value: tile.name.clone(),
            });
        }

        let library = Self {
            articles: Catalog::new("articles", articles.items, articles.categories)?,
            videos: Catalog::new("videos", videos.items, videos.categories)?,
            tutorials: Catalog::new("tutorials", tutorials.items, difficulties)?,
            featured,
            activity: Catalog::new("activity", profile.recent_activity, kinds)?,
            home: HomeSettings {
                tiles: home.tiles,
                weekly_goal: home.weekly_goal,
                trending: home.trending,
            },
            profile: ProfileSettings {
                user: profile.user,
                stats: profile.stats,
                streak: profile.streak,
                achievements: profile.achievements,
            },
        };

        log::info!(
            "Library loaded: {} articles, {} videos, {} tutorials, {} featured, {} activities",
            library.articles.len(),
            library.videos.len(),
            library.tutorials.len(),
            library.featured.len(),
            library.activity.len()
        );
        Ok(library)
    }
}
