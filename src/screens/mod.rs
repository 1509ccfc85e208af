//! Screen Layer
//!
//! View models handed to the rendering layer. Each screen borrows the
//! library, owns its own filter state, and produces serializable views.

pub mod format;
mod articles;
mod videos;
mod tutorials;
mod home;
mod profile;

pub use articles::{ArticleCard, ArticlesScreen, ArticlesView};
pub use videos::{VideoCard, VideoProgress, VideosScreen, VideosView};
pub use tutorials::{TutorialCard, TutorialStats, TutorialsScreen, TutorialsView};
pub use home::{FeaturedCard, HomeScreen, HomeView, TileCard, TrendingView};
pub use profile::{ActivityLine, AchievementsView, ProfileScreen, ProfileView, StreakDay};

use crate::catalog::{Catalog, Chip, ChipSelector, FilterEvent, FilterState, Filterable};

/// Filter state of one screen bound to the catalog it narrows
#[derive(Debug, Clone)]
pub struct Browse<'a, T> {
    catalog: &'a Catalog<T>,
    chips: ChipSelector,
    state: FilterState,
}

impl<'a, T: Filterable> Browse<'a, T> {
    pub fn new(catalog: &'a Catalog<T>) -> Self {
        Self {
            catalog,
            chips: catalog.chip_selector(),
            state: FilterState::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog<T> {
        self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn handle(&mut self, event: FilterEvent) {
        log::debug!("{}: {:?}", self.catalog.name(), event);
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    pub fn chips(&self) -> Vec<Chip> {
        self.chips.chips(&self.state)
    }

    pub fn visible(&self) -> Vec<&'a T> {
        self.catalog.filter(&self.state)
    }
}
