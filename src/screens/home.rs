//! Home Screen
//!
//! Weekly goal, featured carousel, category tiles and the trending card.
//! Tapping a tile narrows the carousel to that category.

use serde::{Deserialize, Serialize};

use super::format;
use super::Browse;
use crate::catalog::aggregate::percentage;
use crate::catalog::{FilterEvent, FilterState, Selection};
use crate::domain::{FeaturedItem, FeaturedMeta};
use crate::seed::{HomeSettings, Library};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCard {
    pub id: u32,
    pub kind: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub meta: String,
}

impl From<&FeaturedItem> for FeaturedCard {
    fn from(item: &FeaturedItem) -> Self {
        let meta = match item.meta {
            FeaturedMeta::ReadTimeMinutes(m) | FeaturedMeta::DurationMinutes(m) => format::read_time(m),
            FeaturedMeta::Steps(n) => format!("{} steps", n),
        };
        Self {
            id: item.id,
            kind: item.kind.label().to_string(),
            title: item.title.clone(),
            image: item.image.clone(),
            category: item.category.clone(),
            meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileCard {
    pub name: String,
    pub icon: String,
    pub count_label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingView {
    pub title: String,
    pub description: String,
    pub image: String,
    /// e.g. "Article • 10 min read"
    pub meta: String,
    pub views: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub weekly_goal_percent: u32,
    pub featured: Vec<FeaturedCard>,
    pub tiles: Vec<TileCard>,
    pub trending: TrendingView,
}

pub struct HomeScreen<'a> {
    browse: Browse<'a, FeaturedItem>,
    settings: &'a HomeSettings,
}

impl<'a> HomeScreen<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            browse: Browse::new(&library.featured),
            settings: &library.home,
        }
    }

    pub fn state(&self) -> &FilterState {
        self.browse.state()
    }

    /// Tile tap; the tile name is the featured category it selects
    pub fn select_category(&mut self, name: &str) {
        self.browse.handle(FilterEvent::SelectChip(name.to_string()));
    }

    pub fn view(&self) -> HomeView {
        let goal = self.settings.weekly_goal;
        let selection = &self.browse.state().selection;

        let tiles = self
            .settings
            .tiles
            .iter()
            .map(|tile| TileCard {
                name: tile.name.clone(),
                icon: tile.icon.clone(),
                count_label: format!("{} items", tile.count),
                active: *selection == Selection::Only(tile.name.clone()),
            })
            .collect();

        let trending = &self.settings.trending;
        HomeView {
            weekly_goal_percent: percentage(
                goal.completed_minutes as usize,
                goal.target_minutes as usize,
            ),
            featured: self.browse.visible().into_iter().map(FeaturedCard::from).collect(),
            tiles,
            trending: TrendingView {
                title: trending.title.clone(),
                description: trending.description.clone(),
                image: trending.image.clone(),
                meta: format!(
                    "{} • {} read",
                    trending.kind.label(),
                    format::read_time(trending.read_time_minutes)
                ),
                views: format!("{} views", format::compact_count(trending.views)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_view() {
        let library = Library::bundled().unwrap();
        let view = HomeScreen::new(&library).view();

        assert_eq!(view.weekly_goal_percent, 68);
        assert_eq!(view.featured.len(), 3);
        assert_eq!(view.featured[0].meta, "8 min");
        assert_eq!(view.featured[2].meta, "15 steps");
        assert_eq!(view.featured[1].kind, "Video");
        assert_eq!(view.tiles[0].count_label, "24 items");
        assert!(view.tiles.iter().all(|t| !t.active));
        assert_eq!(view.trending.meta, "Article • 10 min read");
        assert_eq!(view.trending.views, "2.4k views");
    }

    #[test]
    fn test_tile_narrows_featured() {
        let library = Library::bundled().unwrap();
        let mut screen = HomeScreen::new(&library);

        screen.select_category("Accessibility");
        let view = screen.view();
        assert_eq!(view.featured.len(), 1);
        assert_eq!(view.featured[0].title, "Accessibility in Modern Web Design");
        assert!(view.tiles[2].active);

        screen.select_category("Usability");
        assert!(screen.view().featured.is_empty());
    }
}
