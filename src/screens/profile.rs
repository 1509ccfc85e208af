//! Profile Screen

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format;
use super::Browse;
use crate::catalog::aggregate::{count, percentage};
use crate::catalog::{Chip, FilterEvent, FilterState};
use crate::domain::{Achievement, ActivityEntry, UserProfile};
use crate::seed::{LearningStats, Library, ProfileSettings};

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakDay {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementsView {
    pub earned: usize,
    pub total: usize,
    pub percent: u32,
    pub items: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLine {
    pub id: u32,
    pub kind: String,
    pub title: String,
    pub action: String,
    pub when: String,
}

impl ActivityLine {
    fn new(entry: &ActivityEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: entry.id,
            kind: entry.kind.as_str().to_string(),
            title: entry.title.clone(),
            action: entry.action.as_str().to_string(),
            when: format::relative_time(entry.occurred_at, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub user: UserProfile,
    pub stats: LearningStats,
    pub streak_label: String,
    pub streak: Vec<StreakDay>,
    pub achievements: AchievementsView,
    pub activity_chips: Vec<Chip>,
    pub activity: Vec<ActivityLine>,
}

pub struct ProfileScreen<'a> {
    browse: Browse<'a, ActivityEntry>,
    settings: &'a ProfileSettings,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            browse: Browse::new(&library.activity),
            settings: &library.profile,
        }
    }

    pub fn state(&self) -> &FilterState {
        self.browse.state()
    }

    /// Narrow recent activity to one content kind ("Article", "Video", "Tutorial")
    pub fn select_kind(&mut self, label: &str) {
        self.browse.handle(FilterEvent::SelectChip(label.to_string()));
    }

    /// Relative dates are computed against `now`
    pub fn view(&self, now: DateTime<Utc>) -> ProfileView {
        let settings = self.settings;
        let achievements = &settings.achievements;
        let earned = count(achievements, |a| a.earned);

        let streak = WEEKDAYS
            .iter()
            .zip(settings.streak.week.iter())
            .map(|(label, active)| StreakDay {
                label: label.to_string(),
                active: *active,
            })
            .collect();

        let days = settings.streak.days;
        ProfileView {
            user: settings.user.clone(),
            stats: settings.stats,
            streak_label: format!("{} {}", days, if days == 1 { "Day" } else { "Days" }),
            streak,
            achievements: AchievementsView {
                earned,
                total: achievements.len(),
                percent: percentage(earned, achievements.len()),
                items: achievements.clone(),
            },
            activity_chips: self.browse.chips(),
            activity: self
                .browse
                .visible()
                .into_iter()
                .map(|entry| ActivityLine::new(entry, now))
                .collect(),
        }
    }
}
