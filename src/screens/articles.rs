//! Articles Screen
//!
//! Category chips plus a search box over title and excerpt.

use serde::{Deserialize, Serialize};

use super::format;
use super::Browse;
use crate::catalog::{Chip, FilterEvent, FilterState};
use crate::domain::Article;
use crate::seed::Library;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCard {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub read_time: String,
    pub views: String,
    pub bookmarked: bool,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            image: article.image.clone(),
            category: article.category.clone(),
            read_time: format::read_time(article.read_time_minutes),
            views: format::compact_count(article.views),
            bookmarked: article.bookmarked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlesView {
    pub query: String,
    pub chips: Vec<Chip>,
    pub articles: Vec<ArticleCard>,
}

impl ArticlesView {
    /// Nothing matched; the renderer shows its empty state
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

pub struct ArticlesScreen<'a> {
    browse: Browse<'a, Article>,
}

impl<'a> ArticlesScreen<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            browse: Browse::new(&library.articles),
        }
    }

    pub fn state(&self) -> &FilterState {
        self.browse.state()
    }

    pub fn select_category(&mut self, label: &str) {
        self.browse.handle(FilterEvent::SelectChip(label.to_string()));
    }

    pub fn search(&mut self, text: &str) {
        self.browse.handle(FilterEvent::QueryChanged(text.to_string()));
    }

    pub fn view(&self) -> ArticlesView {
        ArticlesView {
            query: self.browse.state().query.clone(),
            chips: self.browse.chips(),
            articles: self.browse.visible().into_iter().map(ArticleCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &ArticlesView) -> Vec<u32> {
        view.articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_initial_view_shows_all_articles() {
        let library = Library::bundled().unwrap();
        let screen = ArticlesScreen::new(&library);
        let view = screen.view();

        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.chips.len(), 6);
        assert!(view.chips[0].active);
        assert_eq!(view.articles[0].read_time, "8 min");
        assert_eq!(view.articles[0].views, "1.2k");
    }

    #[test]
    fn test_category_then_search() {
        let library = Library::bundled().unwrap();
        let mut screen = ArticlesScreen::new(&library);

        screen.select_category("UI/UX");
        assert_eq!(ids(&screen.view()), vec![1, 5]);

        screen.search("SYSTEMS");
        let view = screen.view();
        assert_eq!(ids(&view), vec![5]);
        assert_eq!(view.query, "SYSTEMS");
    }

    #[test]
    fn test_search_hits_excerpt() {
        let library = Library::bundled().unwrap();
        let mut screen = ArticlesScreen::new(&library);

        screen.search("disabilities");
        assert_eq!(ids(&screen.view()), vec![3]);
    }

    #[test]
    fn test_no_results_is_empty_view() {
        let library = Library::bundled().unwrap();
        let mut screen = ArticlesScreen::new(&library);

        screen.select_category("Research");
        screen.search("xyz-nonexistent");
        assert!(screen.view().is_empty());
    }
}
