//! Profile Entities
//!
//! Learner-facing records on the profile screen: recent activity and achievements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::content::ContentKind;
use super::entity::Entity;

/// What the learner did with a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    Read,
    Completed,
    Started,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Read => "Read",
            ActivityAction::Completed => "Completed",
            ActivityAction::Started => "Started",
        }
    }
}

/// One line in the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: ContentKind,
    pub title: String,
    pub action: ActivityAction,
    pub occurred_at: DateTime<Utc>,
}

impl Entity for ActivityEntry {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub earned: bool,
}

impl Entity for Achievement {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Account card at the top of the profile screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
}
