//! Article Entity
//!
//! A long-form reading item. Articles are the only collection with a search box.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// An article in the reading list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    /// Short teaser shown under the title
    pub excerpt: String,
    /// Cover image URL
    pub image: String,
    /// One of the article categories declared alongside the collection
    pub category: String,
    pub read_time_minutes: u32,
    pub views: u32,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Article {
    pub fn new(id: u32, title: &str, excerpt: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            image: String::new(),
            category: category.to_string(),
            read_time_minutes: 0,
            views: 0,
            bookmarked: false,
        }
    }
}

impl Entity for Article {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_creation() {
        let article = Article::new(1, "Cognitive Load", "Less is more", "Psychology");
        assert_eq!(article.id(), 1);
        assert_eq!(article.category, "Psychology");
        assert!(!article.bookmarked);
    }

    #[test]
    fn test_bookmarked_defaults_to_false() {
        let json = r#"{
            "id": 7,
            "title": "T",
            "excerpt": "E",
            "image": "",
            "category": "Research",
            "read_time_minutes": 5,
            "views": 10
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(!article.bookmarked);
        assert_eq!(article.read_time_minutes, 5);
    }
}
