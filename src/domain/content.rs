//! Content Kind & Difficulty
//!
//! Small closed enumerations shared by several collections.

use serde::{Deserialize, Serialize};

/// Which screen a piece of content belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Video,
    Tutorial,
}

impl ContentKind {
    /// All kinds in navigation order
    pub const ALL: [ContentKind; 3] = [ContentKind::Article, ContentKind::Video, ContentKind::Tutorial];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Video => "video",
            ContentKind::Tutorial => "tutorial",
        }
    }

    /// Display label, also used as the chip label
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "Article",
            ContentKind::Video => "Video",
            ContentKind::Tutorial => "Tutorial",
        }
    }
}

/// Tutorial difficulty tier, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers from least to most severe; default chip order
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Badge color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "#10B981",
            Difficulty::Intermediate => "#F59E0B",
            Difficulty::Advanced => "#EF4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
        assert_eq!(Difficulty::ALL.iter().max(), Some(&Difficulty::Advanced));
    }

    #[test]
    fn test_difficulty_wire_name_and_color() {
        let parsed: Difficulty = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
        assert!(serde_json::from_str::<Difficulty>("\"advanced\"").is_err());
        assert_eq!(Difficulty::Intermediate.color(), "#F59E0B");
    }

    #[test]
    fn test_content_kind_serialization() {
        let json = serde_json::to_string(&ContentKind::Tutorial).unwrap();
        assert_eq!(json, "\"tutorial\"");
        assert_eq!(ContentKind::Video.label(), "Video");
    }
}
