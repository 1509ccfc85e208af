//! Featured Item Entity
//!
//! Cards shown in the home screen carousel. Each points at content of some kind.

use serde::{Deserialize, Serialize};
use super::content::ContentKind;
use super::entity::Entity;

/// The one metric a featured card shows next to the clock icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeaturedMeta {
    ReadTimeMinutes(u32),
    DurationMinutes(u32),
    Steps(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub id: u32,
    pub kind: ContentKind,
    pub title: String,
    pub image: String,
    pub category: String,
    pub meta: FeaturedMeta,
}

impl Entity for FeaturedItem {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_is_externally_tagged() {
        let json = r#"{
            "id": 3,
            "kind": "tutorial",
            "title": "Building Inclusive Design Systems",
            "image": "",
            "category": "Design Systems",
            "meta": { "steps": 15 }
        }"#;
        let item: FeaturedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ContentKind::Tutorial);
        assert_eq!(item.meta, FeaturedMeta::Steps(15));
    }
}
