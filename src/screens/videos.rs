//! Videos Screen

use serde::{Deserialize, Serialize};

use super::format;
use super::Browse;
use crate::catalog::aggregate::{count, percentage};
use crate::catalog::{Chip, FilterEvent, FilterState};
use crate::domain::Video;
use crate::seed::Library;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub duration: String,
    pub instructor: String,
    pub views: String,
    pub completed: bool,
    pub bookmarked: bool,
}

impl From<&Video> for VideoCard {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            description: video.description.clone(),
            thumbnail: video.thumbnail.clone(),
            category: video.category.clone(),
            duration: format::clock(video.duration_seconds),
            instructor: video.instructor.clone(),
            views: format::compact_count(video.views),
            completed: video.completed,
            bookmarked: video.bookmarked,
        }
    }
}

/// Learning progress over the whole collection, independent of the chip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded, for the progress circle
    pub percent: u32,
    /// Unrounded 0.0..=1.0, for the progress bar width
    pub fraction: f64,
}

impl VideoProgress {
    fn of(videos: &[Video]) -> Self {
        let completed = count(videos, |v| v.completed);
        let total = videos.len();
        let fraction = if total == 0 { 0.0 } else { completed as f64 / total as f64 };
        Self {
            completed,
            total,
            percent: percentage(completed, total),
            fraction,
        }
    }

    /// Header subtitle, e.g. "1 of 5 completed"
    pub fn summary(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosView {
    pub progress: VideoProgress,
    pub chips: Vec<Chip>,
    pub videos: Vec<VideoCard>,
}

pub struct VideosScreen<'a> {
    browse: Browse<'a, Video>,
}

impl<'a> VideosScreen<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            browse: Browse::new(&library.videos),
        }
    }

    pub fn state(&self) -> &FilterState {
        self.browse.state()
    }

    pub fn select_category(&mut self, label: &str) {
        self.browse.handle(FilterEvent::SelectChip(label.to_string()));
    }

    pub fn view(&self) -> VideosView {
        VideosView {
            progress: VideoProgress::of(self.browse.catalog().items()),
            chips: self.browse.chips(),
            videos: self.browse.visible().into_iter().map(VideoCard::from).collect(),
        }
    }
}
